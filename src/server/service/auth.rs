//! Authentication service for business logic.
//!
//! This module provides the `AuthService` for account registration and
//! credential verification. Passwords are hashed with Argon2 before storage
//! and verified against the stored hash during login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, LoginUserParam, RegisterUserParam, User},
    util::password::{hash_password, verify_password},
};

/// Minimum accepted password length for new accounts.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Service providing business logic for registration and login.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account.
    ///
    /// Validates the submitted fields, rejects emails that are already
    /// registered, hashes the password, and stores the account. New accounts
    /// never have admin privileges; those are granted separately by an
    /// existing admin.
    ///
    /// # Arguments
    /// - `param` - Registration parameters with the plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The newly created account
    /// - `Err(AppError::BadRequest)` - Empty name, malformed email, or too-short password
    /// - `Err(AppError::Conflict)` - Email is already registered
    /// - `Err(AppError)` - Database or hashing error
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let name = param.name.trim().to_string();
        let email = param.email.trim().to_lowercase();

        if name.is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }

        if !email.contains('@') {
            return Err(AppError::BadRequest(
                "Email address is not valid".to_string(),
            ));
        }

        if param.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&email).await? {
            return Err(AppError::Conflict(
                "Email is already registered".to_string(),
            ));
        }

        let password_hash = hash_password(&param.password)?;

        let user = user_repo
            .create(CreateUserParam {
                name,
                email,
                password_hash,
                admin: false,
            })
            .await?;

        tracing::info!("Registered new user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Verifies login credentials.
    ///
    /// Looks up the account by email and checks the submitted password against
    /// the stored hash. Unknown emails and wrong passwords produce the same
    /// error so the response does not reveal which one failed.
    ///
    /// # Arguments
    /// - `param` - Login parameters with the plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError)` - Database error during lookup
    pub async fn login(&self, param: LoginUserParam) -> Result<User, AppError> {
        let email = param.email.trim().to_lowercase();

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
