//! SQLite persistence for topic versions and resource attachments.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use topicforge_core::error::CoreError;

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use store::SqliteStore;

pub type DbPool = sqlx::SqlitePool;

/// Tables the domain layer requires before it can serve requests.
pub const REQUIRED_TABLES: &[&str] = &["topic", "resource"];

/// Create a connection pool from a database URL.
///
/// The database file is created if missing and foreign keys are enforced on
/// every connection.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations under `migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Fail if any of [`REQUIRED_TABLES`] is absent.
pub async fn verify_schema(pool: &DbPool) -> Result<(), CoreError> {
    for table in REQUIRED_TABLES {
        let found: Option<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1")
                .bind(*table)
                .fetch_optional(pool)
                .await
                .map_err(error::map_db_error)?;
        if found.is_none() {
            return Err(CoreError::Storage(format!(
                "Required table '{table}' is missing; run migrations first"
            )));
        }
    }
    Ok(())
}
