use super::*;

/// Tests marking a notification as read.
///
/// Expected: Ok(Some(Notification)) with read set
#[tokio::test]
async fn marks_notification_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_read(notification.id).await?.unwrap();

    assert!(updated.read);
    assert_eq!(repo.unread_count(user.id).await?, 0);

    Ok(())
}

/// Tests marking a missing notification.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_adoption_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);

    assert!(repo.mark_read(4242).await?.is_none());

    Ok(())
}
