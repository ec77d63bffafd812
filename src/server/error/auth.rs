use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login attempt with an unknown email or a wrong password.
    ///
    /// Both cases map to the same variant so the response does not reveal
    /// whether the email is registered. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No user id in the session and no usable bearer token on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request has no authenticated user")]
    NotAuthenticated,

    /// The session or token references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authenticated user {0} no longer exists")]
    UserNotInDatabase(i32),

    /// The bearer token failed signature validation or has expired.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token is invalid or expired")]
    InvalidToken,

    /// The authenticated user lacks a required permission.
    ///
    /// Results in a 403 Forbidden response. The detail string is logged but
    /// not returned to the client.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All 401 variants return the same generic message to avoid leaking which part
/// of the credential check failed. Access denials are logged at debug level with
/// the detail string.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::NotAuthenticated | Self::UserNotInDatabase(_) | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not authenticated".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, detail) => {
                tracing::debug!("Access denied for user {}: {}", user_id, detail);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Access denied".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
