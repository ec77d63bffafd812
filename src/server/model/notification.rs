//! Notification domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::notification::{NotificationDto, NotificationListDto};

/// Notification delivered to a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    /// Adoption that triggered this notification, when there is one.
    pub adoption_id: Option<i32>,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            adoption_id: self.adoption_id,
            message: self.message,
            read: self.read,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a notification domain model at the repository boundary.
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            adoption_id: entity.adoption_id,
            message: entity.message,
            read: entity.read,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating one notification. Used directly and in batches
/// when an adoption decision fans out to several users.
#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub user_id: i32,
    pub adoption_id: Option<i32>,
    pub message: String,
}

/// A page of one user's notifications plus the unread count.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationList {
    pub notifications: Vec<Notification>,
    pub unread: u64,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl NotificationList {
    pub fn into_dto(self) -> NotificationListDto {
        NotificationListDto {
            notifications: self
                .notifications
                .into_iter()
                .map(|n| n.into_dto())
                .collect(),
            unread: self.unread,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
