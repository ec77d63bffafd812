//! Adoption factory for creating test adoption requests.

use chrono::Utc;
use entity::adoption::AdoptionStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test adoption requests with customizable fields.
///
/// Requires the pet and user ids of already inserted rows, since adoptions
/// reference both.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::adoption::AdoptionFactory;
///
/// let adoption = AdoptionFactory::new(&db, pet.id, user.id)
///     .message("We have a big garden")
///     .build()
///     .await?;
/// ```
pub struct AdoptionFactory<'a> {
    db: &'a DatabaseConnection,
    pet_id: i32,
    user_id: i32,
    message: Option<String>,
    status: AdoptionStatus,
    decided: bool,
}

impl<'a> AdoptionFactory<'a> {
    /// Creates a new AdoptionFactory with default values.
    ///
    /// Defaults:
    /// - message: `None`
    /// - status: `Pending`
    /// - decided_at: `None` (set automatically when status is not pending)
    pub fn new(db: &'a DatabaseConnection, pet_id: i32, user_id: i32) -> Self {
        Self {
            db,
            pet_id,
            user_id,
            message: None,
            status: AdoptionStatus::Pending,
            decided: false,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn status(mut self, status: AdoptionStatus) -> Self {
        self.decided = status != AdoptionStatus::Pending;
        self.status = status;
        self
    }

    /// Builds and inserts the adoption entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::adoption::Model)` - Created adoption entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::adoption::Model, DbErr> {
        let now = Utc::now();
        entity::adoption::ActiveModel {
            pet_id: ActiveValue::Set(self.pet_id),
            user_id: ActiveValue::Set(self.user_id),
            message: ActiveValue::Set(self.message),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            decided_at: ActiveValue::Set(self.decided.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending adoption request.
///
/// Shorthand for `AdoptionFactory::new(db, pet_id, user_id).build().await`.
pub async fn create_adoption(
    db: &DatabaseConnection,
    pet_id: i32,
    user_id: i32,
) -> Result<entity::adoption::Model, DbErr> {
    AdoptionFactory::new(db, pet_id, user_id).build().await
}
