//! Notification service for business logic.
//!
//! This module provides the `NotificationService` for reading a user's
//! notification feed and updating read state. Notification creation happens
//! inside the adoption decision flow.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::{auth::AuthError, AppError},
    model::notification::{Notification, NotificationList},
};

/// Service providing business logic for notifications.
pub struct NotificationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NotificationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user's notifications with pagination.
    ///
    /// Returns the requested page newest first, along with the user's unread
    /// count so clients can render a badge without a second request.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the recipient
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of notifications per page
    ///
    /// # Returns
    /// - `Ok(NotificationList)` - Notifications with unread count and pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_for_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<NotificationList, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let (notifications, total) = notification_repo
            .get_by_user_paginated(user_id, page, per_page)
            .await?;
        let unread = notification_repo.unread_count(user_id).await?;

        let total_pages = total.div_ceil(per_page);

        Ok(NotificationList {
            notifications,
            unread,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Marks one of the user's notifications as read.
    ///
    /// # Arguments
    /// - `notification_id` - Primary key of the notification
    /// - `user_id` - Primary key of the user making the call
    ///
    /// # Returns
    /// - `Ok(Notification)` - The updated notification
    /// - `Err(AppError::NotFound)` - No notification with that ID exists
    /// - `Err(AppError::AuthErr(AuthError::AccessDenied))` - The notification belongs to someone else
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn mark_read(
        &self,
        notification_id: i32,
        user_id: i32,
    ) -> Result<Notification, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let Some(notification) = notification_repo.get_by_id(notification_id).await? else {
            return Err(AppError::NotFound("Notification not found".to_string()));
        };

        if notification.user_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!(
                    "user attempted to mark notification {} belonging to user {}",
                    notification.id, notification.user_id
                ),
            )
            .into());
        }

        let Some(updated) = notification_repo.mark_read(notification.id).await? else {
            return Err(AppError::NotFound("Notification not found".to_string()));
        };

        Ok(updated)
    }

    /// Marks all of a user's notifications as read.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the recipient
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications that changed state
    /// - `Err(AppError::DbErr)` - Database error during bulk update
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        let notification_repo = NotificationRepository::new(self.db);
        let updated = notification_repo.mark_all_read(user_id).await?;
        Ok(updated)
    }
}
