//! Endpoint access control.
//!
//! `AuthGuard` resolves the calling user from either the cookie session or a
//! bearer token and enforces permission requirements. The session is checked
//! first; when no session is established, the `Authorization` header is tried
//! as a fallback so API clients can authenticate with the JWT returned at
//! login.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    state::AppState,
    util::jwt::JwtKeys,
};

/// Permissions an endpoint can require beyond being logged in.
pub enum Permission {
    Admin,
}

/// Access guard resolving and authorizing the calling user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
    session: &'a Session,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, session: &'a Session, headers: &'a HeaderMap) -> Self {
        Self {
            db: &state.db,
            jwt: &state.jwt,
            session,
            headers,
        }
    }

    /// Resolves the calling user and checks the required permissions.
    ///
    /// The cookie session takes precedence; a valid `Authorization: Bearer`
    /// token is accepted when no session is established. The user is always
    /// re-fetched from the database so revoked accounts and stale admin flags
    /// are caught on every request.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the endpoint requires (empty for any logged-in user)
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated, authorized user
    /// - `Err(AppError::AuthErr(_))` - Not authenticated or missing a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user_id = match AuthSession::new(self.session).get_user_id().await? {
            Some(user_id) => user_id,
            None => self.bearer_user_id()?,
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "user attempted an admin operation without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Extracts and verifies the user ID from the `Authorization` header.
    fn bearer_user_id(&self) -> Result<i32, AuthError> {
        let header = self
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::NotAuthenticated)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::NotAuthenticated)?;

        let claims = self.jwt.verify(token)?;

        Ok(claims.sub)
    }
}
