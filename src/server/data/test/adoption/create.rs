use super::*;

/// Tests submitting an adoption request.
///
/// Verifies that new requests start pending with no decision timestamp.
///
/// Expected: Ok(Adoption) in the pending state
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_pet(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = AdoptionRepository::new(db);

    let adoption = repo
        .create(SubmitAdoptionParam {
            pet_id: pet.id,
            user_id: user.id,
            message: Some("We have a garden".to_string()),
        })
        .await?;

    assert!(adoption.id > 0);
    assert_eq!(adoption.pet_id, pet.id);
    assert_eq!(adoption.user_id, user.id);
    assert_eq!(adoption.message.as_deref(), Some("We have a garden"));
    assert_eq!(adoption.status, AdoptionStatus::Pending);
    assert!(adoption.decided_at.is_none());

    Ok(())
}
