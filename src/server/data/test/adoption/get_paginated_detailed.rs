use super::*;

/// Tests the admin review listing.
///
/// Verifies that every row carries both the pet and the requesting user.
///
/// Expected: Ok((details, total)) with matching related records
#[tokio::test]
async fn loads_pet_and_user_for_each_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_pet(db).await?;
    let user_a = factory::user::create_user(db).await?;
    let user_b = factory::user::create_user(db).await?;

    factory::adoption::create_adoption(db, pet.id, user_a.id).await?;
    factory::adoption::create_adoption(db, pet.id, user_b.id).await?;

    let repo = AdoptionRepository::new(db);

    let (details, total) = repo
        .get_paginated_detailed(ListAdoptionsParam {
            page: 0,
            per_page: 10,
            status: None,
        })
        .await?;

    assert_eq!(total, 2);
    assert_eq!(details.len(), 2);
    assert!(details
        .iter()
        .all(|d| d.pet.id == d.adoption.pet_id && d.user.id == d.adoption.user_id));

    Ok(())
}

/// Tests the status filter on the review listing.
///
/// Expected: only requests with the requested status
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_pet(db).await?;
    let user_a = factory::user::create_user(db).await?;
    let user_b = factory::user::create_user(db).await?;

    factory::adoption::create_adoption(db, pet.id, user_a.id).await?;
    factory::adoption::AdoptionFactory::new(db, pet.id, user_b.id)
        .status(entity::adoption::AdoptionStatus::Rejected)
        .build()
        .await?;

    let repo = AdoptionRepository::new(db);

    let (pending, total) = repo
        .get_paginated_detailed(ListAdoptionsParam {
            page: 0,
            per_page: 10,
            status: Some(AdoptionStatus::Pending),
        })
        .await?;

    assert_eq!(total, 1);
    assert!(pending
        .iter()
        .all(|d| d.adoption.status == AdoptionStatus::Pending));

    Ok(())
}

/// Tests pagination of the review listing.
///
/// Expected: per_page respected with the full count in total
#[tokio::test]
async fn paginates_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    for _ in 0..5 {
        let pet = factory::pet::create_pet(db).await?;
        factory::adoption::create_adoption(db, pet.id, user.id).await?;
    }

    let repo = AdoptionRepository::new(db);

    let (first_page, total) = repo
        .get_paginated_detailed(ListAdoptionsParam {
            page: 0,
            per_page: 2,
            status: None,
        })
        .await?;

    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);

    Ok(())
}
