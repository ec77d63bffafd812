use axum::http::{header, HeaderMap, HeaderValue};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, auth::Permission, session::AuthSession},
    state::AppState,
    util::jwt::JwtKeys,
};
use test_utils::{builder::TestBuilder, factory};


/// Builds an application state around the test database.
fn test_state(db: &DatabaseConnection) -> AppState {
    AppState::new(
        db.clone(),
        JwtKeys::new("test-secret"),
        "uploads".into(),
        "http://localhost:8080".to_string(),
    )
}

/// Builds an `Authorization: Bearer` header map for the given token.
fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&format!("Bearer {}", token)).unwrap();
    headers.insert(header::AUTHORIZATION, value);
    headers
}
