use super::*;

use crate::server::data::{
    adoption::AdoptionRepository, notification::NotificationRepository,
};

/// Tests deleting a pet listing.
///
/// Expected: Ok(true) and the pet is gone afterwards
#[tokio::test]
async fn deletes_existing_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_pet(db).await?;

    let repo = PetRepository::new(db);

    assert!(repo.delete(pet.id).await?);
    assert!(repo.get_by_id(pet.id).await?.is_none());

    Ok(())
}

/// Tests deleting a pet that has adoption history.
///
/// Verifies that the pet's adoption requests are removed with it and that
/// notifications referencing those requests survive with the reference
/// cleared.
///
/// Expected: Ok(true), requests gone, notification kept without its reference
#[tokio::test]
async fn deletes_pet_with_adoption_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::create_pet(db).await?;
    let user = factory::user::create_user(db).await?;
    let adoption = factory::adoption::create_adoption(db, pet.id, user.id).await?;
    let notification = factory::notification::NotificationFactory::new(db, user.id)
        .adoption_id(adoption.id)
        .build()
        .await?;

    let repo = PetRepository::new(db);

    assert!(repo.delete(pet.id).await?);
    assert!(repo.get_by_id(pet.id).await?.is_none());

    let adoption_repo = AdoptionRepository::new(db);
    assert!(adoption_repo.get_by_id(adoption.id).await?.is_none());

    let notification_repo = NotificationRepository::new(db);
    let kept = notification_repo.get_by_id(notification.id).await?.unwrap();
    assert!(kept.adoption_id.is_none());

    Ok(())
}

/// Tests deleting a missing pet.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);

    assert!(!repo.delete(4242).await?);

    Ok(())
}
