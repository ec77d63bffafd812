//! Notification data repository for database operations.
//!
//! This module provides the `NotificationRepository` for managing per-user notifications
//! in the database. It handles single and batch creation, paginated retrieval with unread
//! counts, and read-state updates.

use crate::server::model::notification::{CreateNotificationParam, Notification};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for notifications.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    /// Creates a new NotificationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NotificationRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a notification from parameter model.
    ///
    /// New notifications always start unread.
    ///
    /// # Arguments
    /// - `param` - Notification parameters including recipient, optional adoption, and message
    ///
    /// # Returns
    /// - `Ok(Notification)` - The created notification
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            adoption_id: ActiveValue::Set(param.adoption_id),
            message: ActiveValue::Set(param.message),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Creates multiple notifications in a single insert.
    ///
    /// Used by the adoption decision fan-out, where one decision can notify
    /// several users at once. Returns early if the batch is empty.
    ///
    /// # Arguments
    /// - `params` - Notification parameters, one per recipient
    ///
    /// # Returns
    /// - `Ok(())` - Notifications created (or nothing to do)
    /// - `Err(DbErr)` - Database error during batch insert
    pub async fn create_many(&self, params: Vec<CreateNotificationParam>) -> Result<(), DbErr> {
        if params.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models = params
            .into_iter()
            .map(|param| entity::notification::ActiveModel {
                user_id: ActiveValue::Set(param.user_id),
                adoption_id: ActiveValue::Set(param.adoption_id),
                message: ActiveValue::Set(param.message),
                read: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::Notification::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets a notification by its ID.
    ///
    /// # Arguments
    /// - `notification_id` - Primary key of the notification
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - Notification found
    /// - `Ok(None)` - No notification found with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, notification_id: i32) -> Result<Option<Notification>, DbErr> {
        let entity = entity::prelude::Notification::find_by_id(notification_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Notification::from_entity))
    }

    /// Gets a user's notifications with pagination.
    ///
    /// Results are ordered newest first.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the recipient
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of notifications to return per page
    ///
    /// # Returns
    /// - `Ok((notifications, total))` - Notifications for the page and the user's total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Notification>, u64), DbErr> {
        let paginator = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let notifications = entities.into_iter().map(Notification::from_entity).collect();

        Ok((notifications, total))
    }

    /// Counts a user's unread notifications.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the recipient
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of unread notifications
    /// - `Err(DbErr)` - Database error during count query
    pub async fn unread_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .count(self.db)
            .await
    }

    /// Marks a notification as read.
    ///
    /// # Arguments
    /// - `notification_id` - Primary key of the notification
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - The updated notification
    /// - `Ok(None)` - No notification found with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_read(&self, notification_id: i32) -> Result<Option<Notification>, DbErr> {
        let Some(entity) = entity::prelude::Notification::find_by_id(notification_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::notification::ActiveModel = entity.into();
        active.read = ActiveValue::Set(true);
        let updated = active.update(self.db).await?;

        Ok(Some(Notification::from_entity(updated)))
    }

    /// Marks all of a user's notifications as read.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the recipient
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications that were updated
    /// - `Err(DbErr)` - Database error during bulk update
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
