//! User service for business logic.
//!
//! This module provides the `UserService` for admin-facing user management:
//! paginated listings and granting or revoking admin privileges.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetAllUsersParam, PaginatedUsers, SetAdminParam, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users with pagination.
    ///
    /// Returns a paginated collection of users ordered alphabetically by name.
    /// Calculates total pages from the per_page parameter and total user count.
    ///
    /// # Arguments
    /// - `param` - Parameters specifying page number and users per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (users, total) = user_repo
            .get_all_paginated(param.page, param.per_page)
            .await?;

        let total_pages = total.div_ceil(param.per_page);

        Ok(PaginatedUsers {
            users,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Sets admin status for a user.
    ///
    /// Grants or revokes admin privileges for the specified user and returns
    /// the updated account.
    ///
    /// # Arguments
    /// - `param` - Parameters containing the user ID and desired admin status
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_admin(&self, param: SetAdminParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.set_admin(param.user_id, param.is_admin).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        tracing::info!(
            "Admin status for user {} set to {}",
            user.id,
            param.is_admin
        );

        Ok(user)
    }
}
