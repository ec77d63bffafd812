use super::*;

/// Tests the unread counter.
///
/// Expected: only the user's unread notifications are counted
#[tokio::test]
async fn counts_only_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::notification::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .read(true)
        .build()
        .await?;
    factory::notification::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.unread_count(user.id).await?, 1);

    Ok(())
}

/// Tests a user with no notifications.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.unread_count(user.id).await?, 0);

    Ok(())
}
