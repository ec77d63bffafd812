use super::*;

/// Tests the notification inbox listing.
///
/// Expected: only the user's notifications with the full count in total
#[tokio::test]
async fn returns_own_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::notification::create_notification(db, user.id).await?;
    factory::notification::create_notification(db, user.id).await?;
    factory::notification::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let (notifications, total) = repo.get_by_user_paginated(user.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(notifications.len(), 2);
    assert!(notifications.iter().all(|n| n.user_id == user.id));

    Ok(())
}

/// Tests pagination of the inbox.
///
/// Expected: per_page respected with the full count in total
#[tokio::test]
async fn paginates_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    for _ in 0..5 {
        factory::notification::create_notification(db, user.id).await?;
    }

    let repo = NotificationRepository::new(db);
    let (first_page, total) = repo.get_by_user_paginated(user.id, 0, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);

    Ok(())
}
