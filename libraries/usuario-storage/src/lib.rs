//! Usuario Storage
//!
//! `SQLite` database layer for the Usuario registry.
//!
//! This crate stores user records in a single `usuario` table. By default the
//! database lives in memory and disappears with the process.
//!
//! # Example
//!
//! ```rust,no_run
//! use usuario_core::{RecordStore, UserRecord};
//! use usuario_storage::SqliteRecordStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteRecordStore::connect("sqlite::memory:").await?;
//!
//! store.insert(UserRecord::new(12345678901, "Ana", "1990-01-01").into()).await?;
//! assert!(store.exists(12345678901).await?);
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod users;

pub use context::SqliteRecordStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Must run once on every new pool; an in-memory database starts empty.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Whether the connection string names an in-memory database
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g. `sqlite::memory:` or `sqlite://usuario.db`)
///
/// An in-memory database exists only as long as its connection, so such a
/// pool keeps exactly one connection open and never recycles it. All store
/// operations are then serialized through that connection.
pub async fn create_pool(database_url: &str) -> error::Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    if !database_url.starts_with("sqlite:") {
        return Err(StorageError::Connection(format!(
            "unsupported database url: {database_url}"
        )));
    }

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?;

    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        let options = options
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(30));

        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?
    };

    tracing::debug!("SQLite pool created");

    Ok(pool)
}
