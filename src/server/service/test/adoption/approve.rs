use super::*;

/// Tests the full approval cascade.
///
/// Verifies that approving a request marks the pet adopted, rejects every
/// other pending request for the pet, and notifies each affected user.
///
/// Expected: Ok(Adoption) approved, pet adopted, competitors rejected and notified
#[tokio::test]
async fn approval_cascades_to_competing_requests() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_pet(db).await?;
    let winner = factory::user::create_user(db).await?;
    let loser = factory::user::create_user(db).await?;

    let winning = factory::adoption::create_adoption(db, pet.id, winner.id).await?;
    let losing = factory::adoption::create_adoption(db, pet.id, loser.id).await?;

    let service = AdoptionService::new(db);
    let approved = service.approve(winning.id).await?;

    assert_eq!(approved.status, AdoptionStatus::Approved);
    assert!(approved.decided_at.is_some());

    let pet_repo = PetRepository::new(db);
    let pet_now = pet_repo.get_by_id(pet.id).await?.unwrap();
    assert_eq!(pet_now.status, PetStatus::Adopted);

    let adoption_repo = AdoptionRepository::new(db);
    let losing_now = adoption_repo.get_by_id(losing.id).await?.unwrap();
    assert_eq!(losing_now.status, AdoptionStatus::Rejected);
    assert!(losing_now.decided_at.is_some());

    let notification_repo = NotificationRepository::new(db);
    assert_eq!(notification_repo.unread_count(winner.id).await?, 1);
    assert_eq!(notification_repo.unread_count(loser.id).await?, 1);

    let (winner_inbox, _) = notification_repo
        .get_by_user_paginated(winner.id, 0, 10)
        .await?;
    assert!(winner_inbox[0].message.contains("approved"));
    assert_eq!(winner_inbox[0].adoption_id, Some(winning.id));

    let (loser_inbox, _) = notification_repo
        .get_by_user_paginated(loser.id, 0, 10)
        .await?;
    assert!(loser_inbox[0].message.contains("rejected"));
    assert_eq!(loser_inbox[0].adoption_id, Some(losing.id));

    Ok(())
}

/// Tests approving a request with no competitors.
///
/// Expected: only the requester is notified
#[tokio::test]
async fn approval_without_competitors_notifies_requester_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_pet(db).await?;
    let user = factory::user::create_user(db).await?;
    let adoption = factory::adoption::create_adoption(db, pet.id, user.id).await?;

    let service = AdoptionService::new(db);
    service.approve(adoption.id).await?;

    let notification_repo = NotificationRepository::new(db);
    assert_eq!(notification_repo.unread_count(user.id).await?, 1);

    Ok(())
}

/// Tests approving an already-decided request.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_already_decided_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_pet(db).await?;
    let user = factory::user::create_user(db).await?;
    let adoption = factory::adoption::AdoptionFactory::new(db, pet.id, user.id)
        .status(entity::adoption::AdoptionStatus::Rejected)
        .build()
        .await?;

    let service = AdoptionService::new(db);
    let result = service.approve(adoption.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests approving a missing request.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AdoptionService::new(db);
    let result = service.approve(4242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
