//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use super::util::jwt::JwtKeys;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `JwtKeys` holds the pre-built signing and validation keys
/// - `PathBuf` and `String` are cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signing and validation keys for bearer tokens issued at login.
    pub jwt: JwtKeys,

    /// Directory where uploaded pet photos are stored.
    pub upload_dir: PathBuf,

    /// Application base URL for generating links.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized; the resulting state is provided to the Axum router.
    pub fn new(db: DatabaseConnection, jwt: JwtKeys, upload_dir: PathBuf, app_url: String) -> Self {
        Self {
            db,
            jwt,
            upload_dir,
            app_url,
        }
    }
}
