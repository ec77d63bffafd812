use super::*;

/// Tests pagination over the user listing.
///
/// Verifies that pages respect the per_page limit and that the total counts
/// every user, not just the returned page.
///
/// Expected: Ok((users, total)) with a full first page and the remainder on the second
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::user::create_user(db).await?;
    }

    let repo = UserRepository::new(db);

    let (first_page, total) = repo.get_all_paginated(0, 3).await?;
    let (second_page, _) = repo.get_all_paginated(1, 3).await?;

    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 3);
    assert_eq!(second_page.len(), 2);

    Ok(())
}

/// Tests alphabetical ordering of the listing.
///
/// Expected: users sorted by name ascending
#[tokio::test]
async fn orders_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Zoe").build().await?;
    factory::user::UserFactory::new(db).name("Ana").build().await?;
    factory::user::UserFactory::new(db).name("Mia").build().await?;

    let repo = UserRepository::new(db);
    let (users, _) = repo.get_all_paginated(0, 10).await?;

    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Mia", "Zoe"]);

    Ok(())
}

/// Tests an empty database.
///
/// Expected: Ok((empty, 0))
#[tokio::test]
async fn returns_empty_page_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
