//! Opening the embedded SQLite database.
//!
//! Foreign keys are declared in the schema but not enforced: connections run with
//! `PRAGMA foreign_keys = OFF`, so deleting a referenced row leaves dangling ids behind.

use crate::config::Settings;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Create the parent directory of a file-backed database if it does not exist yet.
pub async fn ensure_database_dir(database_url: &str) -> Result<(), AppError> {
    if is_in_memory(database_url) {
        return Ok(());
    }
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}

fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, AppError> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false))
}

/// Open a pool for the configured database. In-memory databases get exactly one
/// long-lived connection, since each SQLite connection would otherwise see its own empty database.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, AppError> {
    ensure_database_dir(&settings.database_url).await?;
    let options = connect_options(&settings.database_url)?;
    let pool = if is_in_memory(&settings.database_url) {
        single_connection_pool(options).await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(settings.max_connections.max(1))
            .connect_with(options)
            .await?
    };
    tracing::info!(database_url = %settings.database_url, "connected to SQLite database");
    Ok(pool)
}

/// Fresh private in-memory database. Used by tests and throwaway runs.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    single_connection_pool(connect_options("sqlite::memory:")?).await
}

async fn single_connection_pool(options: SqliteConnectOptions) -> Result<SqlitePool, AppError> {
    Ok(SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?)
}

/// Round-trip a trivial statement to confirm the database answers.
pub async fn ping(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file.db?mode=memory"));
        assert!(!is_in_memory("sqlite://database/db.sqlite3"));
    }

    #[tokio::test]
    async fn creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("db.sqlite3");
        let url = format!("sqlite://{}", db_path.display());
        ensure_database_dir(&url).await.unwrap();
        assert!(dir.path().join("nested").is_dir());
    }

    #[tokio::test]
    async fn ping_fails_once_the_pool_is_closed() {
        let pool = connect_in_memory().await.unwrap();
        ping(&pool).await.unwrap();
        pool.close().await;
        assert!(matches!(ping(&pool).await, Err(AppError::Db(_))));
    }
}
