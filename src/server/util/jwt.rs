//! Bearer token issuing and validation.
//!
//! Tokens are HS256 JWTs signed with the `JWT_SECRET` configuration value.
//! They exist so API clients that don't keep cookies can still authenticate;
//! the session cookie remains the primary mechanism for browsers.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// How long an issued token stays valid.
const TOKEN_TTL_SECONDS: i64 = 60 * 60 * 24;

/// Claims carried by issued tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the authenticated user.
    pub sub: i32,
    /// Unix timestamp the token was issued at.
    pub iat: i64,
    /// Unix timestamp the token expires at.
    pub exp: i64,
}

/// Pre-built signing and validation keys, shared through `AppState`.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a signed token for the given user id.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT valid for `TOKEN_TTL_SECONDS`
    /// - `Err(AppError::InternalError)` - Signing failed
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + TOKEN_TTL_SECONDS,
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(format!("Failed to sign bearer token: {}", e)))
    }

    /// Validates a token and returns its claims.
    ///
    /// Signature mismatches, expiry, and garbage input all map to
    /// `AuthError::InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
