use super::*;

/// Tests submitting a request for an available pet.
///
/// Expected: Ok(Adoption) in the pending state
#[tokio::test]
async fn submits_request_for_available_pet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_pet(db).await?;
    let user = factory::user::create_user(db).await?;

    let service = AdoptionService::new(db);
    let adoption = service
        .submit(SubmitAdoptionParam {
            pet_id: pet.id,
            user_id: user.id,
            message: None,
        })
        .await?;

    assert_eq!(adoption.status, AdoptionStatus::Pending);
    assert_eq!(adoption.pet_id, pet.id);
    assert_eq!(adoption.user_id, user.id);

    Ok(())
}

/// Tests submitting a request for a missing pet.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_pet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = AdoptionService::new(db);
    let result = service
        .submit(SubmitAdoptionParam {
            pet_id: 4242,
            user_id: user.id,
            message: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests submitting a request for an adopted pet.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_adopted_pet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_adopted_pet(db).await?;
    let user = factory::user::create_user(db).await?;

    let service = AdoptionService::new(db);
    let result = service
        .submit(SubmitAdoptionParam {
            pet_id: pet.id,
            user_id: user.id,
            message: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the duplicate pending request check.
///
/// Expected: Err(AppError::Conflict) on the second submission
#[tokio::test]
async fn rejects_duplicate_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_pet(db).await?;
    let user = factory::user::create_user(db).await?;

    let service = AdoptionService::new(db);
    let param = SubmitAdoptionParam {
        pet_id: pet.id,
        user_id: user.id,
        message: None,
    };

    service.submit(param.clone()).await?;
    let result = service.submit(param).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
