use super::*;

/// Tests updating the editable fields of a listing.
///
/// Expected: Ok(Some(Pet)) with the new values while the photo path is preserved
#[tokio::test]
async fn updates_listing_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::PetFactory::new(db)
        .photo_path("pet-1-abc.jpg")
        .build()
        .await?;

    let repo = PetRepository::new(db);

    let updated = repo
        .update(UpdatePetParam {
            id: pet.id,
            name: "Maple".to_string(),
            species: PetSpecies::Rabbit,
            breed: None,
            age_months: 7,
            description: Some("Very calm".to_string()),
            status: PetStatus::Adopted,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Maple");
    assert_eq!(updated.species, PetSpecies::Rabbit);
    assert_eq!(updated.age_months, 7);
    assert_eq!(updated.status, PetStatus::Adopted);
    assert_eq!(updated.photo_path.as_deref(), Some("pet-1-abc.jpg"));

    Ok(())
}

/// Tests updating a missing pet.
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

    let updated = repo
        .update(UpdatePetParam {
            id: 4242,
            name: "Ghost".to_string(),
            species: PetSpecies::Other,
            breed: None,
            age_months: 1,
            description: None,
            status: PetStatus::Available,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
