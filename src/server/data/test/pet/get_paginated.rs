use super::*;

/// Tests pagination of the pet listing.
///
/// Expected: Ok((pets, total)) with a full first page and the remainder on the second
#[tokio::test]
async fn paginates_pets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::pet::create_pet(db).await?;
    }

    let repo = PetRepository::new(db);

    let (first_page, total) = repo
        .get_paginated(ListPetsParam {
            page: 0,
            per_page: 3,
            species: None,
            status: None,
        })
        .await?;

    let (second_page, _) = repo
        .get_paginated(ListPetsParam {
            page: 1,
            per_page: 3,
            species: None,
            status: None,
        })
        .await?;

    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 3);
    assert_eq!(second_page.len(), 2);

    Ok(())
}

/// Tests the species filter.
///
/// Expected: only pets of the requested species, with a matching total
#[tokio::test]
async fn filters_by_species() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pet::PetFactory::new(db)
        .species(entity::pet::PetSpecies::Cat)
        .build()
        .await?;
    factory::pet::PetFactory::new(db)
        .species(entity::pet::PetSpecies::Cat)
        .build()
        .await?;
    factory::pet::PetFactory::new(db)
        .species(entity::pet::PetSpecies::Dog)
        .build()
        .await?;

    let repo = PetRepository::new(db);

    let (cats, total) = repo
        .get_paginated(ListPetsParam {
            page: 0,
            per_page: 10,
            species: Some(PetSpecies::Cat),
            status: None,
        })
        .await?;

    assert_eq!(total, 2);
    assert!(cats.iter().all(|p| p.species == PetSpecies::Cat));

    Ok(())
}

/// Tests the status filter.
///
/// Expected: only available pets when filtering by available
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pet::create_pet(db).await?;
    factory::pet::create_adopted_pet(db).await?;

    let repo = PetRepository::new(db);

    let (available, total) = repo
        .get_paginated(ListPetsParam {
            page: 0,
            per_page: 10,
            species: None,
            status: Some(PetStatus::Available),
        })
        .await?;

    assert_eq!(total, 1);
    assert!(available.iter().all(|p| p.status == PetStatus::Available));

    Ok(())
}
