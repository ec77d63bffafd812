use super::*;

/// Tests marking a pet adopted.
///
/// Expected: Ok(Some(Pet)) with the adopted status
#[tokio::test]
async fn marks_pet_adopted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_pet(db).await?;

    let repo = PetRepository::new(db);
    let updated = repo.set_status(pet.id, PetStatus::Adopted).await?;

    assert!(updated.is_some_and(|p| p.status == PetStatus::Adopted));

    Ok(())
}

/// Tests recording a photo path.
///
/// Expected: Ok(Some(Pet)) carrying the new path
#[tokio::test]
async fn records_photo_path() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_pet(db).await?;

    let repo = PetRepository::new(db);
    let updated = repo
        .set_photo_path(pet.id, "pet-1-ab12cd34.png".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.photo_path.as_deref(), Some("pet-1-ab12cd34.png"));

    Ok(())
}

/// Tests status updates on a missing pet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);

    assert!(repo.set_status(4242, PetStatus::Adopted).await?.is_none());

    Ok(())
}
