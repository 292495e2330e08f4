//! Ledger Storage
//!
//! `SQLite` persistence for ledger accounts, plus an in-memory store with the
//! same id and account-number assignment rules.
//!
//! # Example
//!
//! ```rust,no_run
//! use ledger_core::{Account, AccountStorage};
//! use ledger_storage::{create_pool, run_migrations, SqliteAccountStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://ledger.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteAccountStore::new(pool);
//! let id = store.create_account(&Account::new("Ada", "Lovelace")).await?;
//! let account = store.get_account_by_id(id).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod memory;

// Vertical slices
pub mod accounts;

pub use context::SqliteAccountStore;
pub use error::StorageError;
pub use memory::MemoryAccountStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// First account number handed out by an empty store
///
/// The `account_number_seq` migration seeds the `SQLite` counter with the
/// same value.
pub const FIRST_ACCOUNT_NUMBER: i64 = 100_001;

/// Run database migrations
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}

/// Create a new `SQLite` pool
///
/// In-memory URLs get a single connection: every `SQLite` connection opens its
/// own private in-memory database.
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let in_memory = database_url.contains(":memory:");

    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(std::time::Duration::from_secs(30));
    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let max_connections = if in_memory { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(database_url, max_connections, "SQLite pool created");

    Ok(pool)
}
