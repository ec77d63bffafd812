//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::{PaginatedUsersDto, UserDto};

/// Application user with credentials and permission flag.
///
/// Carries the stored password hash for credential checks inside the service
/// layer; the hash is dropped at the DTO boundary and never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is intentionally not part of the DTO.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            admin: self.admin,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            password_hash: entity.password_hash,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a new account with a plaintext password.
///
/// The password is hashed inside the auth service; it never reaches the
/// data layer in plaintext.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Parameters for a login attempt.
#[derive(Debug, Clone)]
pub struct LoginUserParam {
    pub email: String,
    pub password: String,
}

/// Parameters for creating a user during registration or admin seeding.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    /// Argon2 PHC hash, already computed by the caller.
    pub password_hash: String,
    pub admin: bool,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

/// Parameters for setting user admin status.
#[derive(Debug, Clone)]
pub struct SetAdminParam {
    pub user_id: i32,
    pub is_admin: bool,
}
