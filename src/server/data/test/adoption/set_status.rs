use super::*;

/// Tests approving a request.
///
/// Expected: Ok(Some(Adoption)) approved with a decision timestamp
#[tokio::test]
async fn approval_records_decision_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_pet(db).await?;
    let user = factory::user::create_user(db).await?;
    let adoption = factory::adoption::create_adoption(db, pet.id, user.id).await?;

    let repo = AdoptionRepository::new(db);
    let updated = repo
        .set_status(adoption.id, AdoptionStatus::Approved)
        .await?
        .unwrap();

    assert_eq!(updated.status, AdoptionStatus::Approved);
    assert!(updated.decided_at.is_some());

    Ok(())
}

/// Tests moving a request back to pending.
///
/// Expected: decision timestamp cleared
#[tokio::test]
async fn pending_clears_decision_time() -> Result<(), DbErr> {
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

    let repo = AdoptionRepository::new(db);
    let updated = repo
        .set_status(adoption.id, AdoptionStatus::Pending)
        .await?
        .unwrap();

    assert_eq!(updated.status, AdoptionStatus::Pending);
    assert!(updated.decided_at.is_none());

    Ok(())
}

/// Tests updating a missing request.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdoptionRepository::new(db);

    assert!(repo
        .set_status(4242, AdoptionStatus::Approved)
        .await?
        .is_none());

    Ok(())
}
