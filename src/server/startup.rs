use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::CreateUserParam,
    util::password::hash_password,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Reuses the SeaORM connection's underlying SQLx pool for the tower-sessions
/// SQLite store, migrates the session table, and configures a 7-day inactivity
/// expiry.
///
/// # Returns
/// - `Ok(SessionManagerLayer<SqliteStore>)` - Layer ready to attach to the router
/// - `Err(AppError::InternalError)` - Session table migration failed
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());

    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(store).with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Creates the photo upload directory if it does not exist yet.
pub async fn ensure_upload_dir(config: &Config) -> Result<(), AppError> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;
    Ok(())
}

/// Seeds the first admin account when no admin exists in the database.
///
/// Uses the optional `ADMIN_EMAIL`/`ADMIN_PASSWORD` configuration values. When
/// they are unset and no admin exists, a warning is logged since admin-only
/// endpoints would be unreachable.
///
/// # Returns
/// - `Ok(())` - Admin exists, was seeded, or the warning was logged
/// - `Err(AppError)` - Database error or password hashing failure
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::warn!(
            "No admin user exists and ADMIN_EMAIL/ADMIN_PASSWORD are not set; \
             admin endpoints will be unreachable"
        );
        return Ok(());
    };

    if user_repo.find_by_email(email).await?.is_some() {
        tracing::warn!(
            "No admin user exists but {} is already registered; \
             not overwriting the existing account",
            email
        );
        return Ok(());
    }

    let password_hash = hash_password(password)?;
    user_repo
        .create(CreateUserParam {
            name: "Admin".to_string(),
            email: email.clone(),
            password_hash,
            admin: true,
        })
        .await?;

    tracing::info!("Seeded initial admin account {}", email);

    Ok(())
}
