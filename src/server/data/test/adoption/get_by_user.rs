use super::*;

/// Tests retrieving a user's requests with their pets.
///
/// Expected: only the user's own requests, each with the referenced pet
#[tokio::test]
async fn returns_own_requests_with_pets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet_a = factory::pet::create_pet(db).await?;
    let pet_b = factory::pet::create_pet(db).await?;
    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::adoption::create_adoption(db, pet_a.id, user.id).await?;
    factory::adoption::create_adoption(db, pet_b.id, user.id).await?;
    factory::adoption::create_adoption(db, pet_a.id, other.id).await?;

    let repo = AdoptionRepository::new(db);
    let adoptions = repo.get_by_user(user.id).await?;

    assert_eq!(adoptions.len(), 2);
    assert!(adoptions.iter().all(|a| a.adoption.user_id == user.id));
    assert!(adoptions
        .iter()
        .all(|a| a.pet.id == a.adoption.pet_id));

    Ok(())
}

/// Tests a user with no requests.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_user_without_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = AdoptionRepository::new(db);
    let adoptions = repo.get_by_user(user.id).await?;

    assert!(adoptions.is_empty());

    Ok(())
}
