use super::*;

/// Tests deleting a request.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_request() -> Result<(), DbErr> {
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

    assert!(repo.delete(adoption.id).await?);
    assert!(repo.get_by_id(adoption.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing request.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdoptionRepository::new(db);

    assert!(!repo.delete(4242).await?);

    Ok(())
}
