use super::*;

/// Tests creating a pet listing.
///
/// Verifies that new listings start as available with no photo.
///
/// Expected: Ok(Pet) with matching fields and default state
#[tokio::test]
async fn creates_available_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);

    let pet = repo
        .create(CreatePetParam {
            name: "Biscuit".to_string(),
            species: PetSpecies::Dog,
            breed: Some("Beagle".to_string()),
            age_months: 18,
            description: Some("Loves long walks".to_string()),
        })
        .await?;

    assert!(pet.id > 0);
    assert_eq!(pet.name, "Biscuit");
    assert_eq!(pet.species, PetSpecies::Dog);
    assert_eq!(pet.breed.as_deref(), Some("Beagle"));
    assert_eq!(pet.age_months, 18);
    assert_eq!(pet.status, PetStatus::Available);
    assert!(pet.photo_path.is_none());

    Ok(())
}

/// Tests looking up a created pet by ID.
///
/// Expected: Ok(Some(Pet)), Ok(None) for unknown IDs
#[tokio::test]
async fn get_by_id_roundtrip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::pet::create_pet(db).await?;

    let repo = PetRepository::new(db);

    let found = repo.get_by_id(created.id).await?;
    assert_eq!(found.map(|p| p.id), Some(created.id));

    let missing = repo.get_by_id(created.id + 1000).await?;
    assert!(missing.is_none());

    Ok(())
}
