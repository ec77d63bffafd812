//! Password hashing and verification.
//!
//! Passwords are stored as argon2 PHC strings. Verification failures and
//! unknown-hash formats both surface as a non-match so login code can treat
//! them uniformly as invalid credentials.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes a plaintext password into an argon2 PHC string.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash suitable for storage
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Verifies a plaintext password against a stored PHC hash string.
///
/// A malformed stored hash counts as a non-match rather than an error, so a
/// corrupted row cannot be logged in against.
///
/// # Returns
/// - `true` - Password matches the stored hash
/// - `false` - Password does not match, or the stored hash is malformed
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
