//! Storage port for accounts

use crate::error::Result;
use crate::types::{Account, AccountId};
use async_trait::async_trait;

/// Persistence operations the ledger needs from a backing store
///
/// Implementations assign `id` and `number` on creation; the values carried by
/// the account passed to [`AccountStorage::create_account`] are ignored.
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait AccountStorage: Send + Sync {
    /// Persist a new account and return its storage-assigned id
    async fn create_account(&self, account: &Account) -> Result<AccountId>;

    /// Get account by ID
    ///
    /// # Errors
    /// Returns `LedgerError::NotFound` when no account has this id
    async fn get_account_by_id(&self, id: AccountId) -> Result<Account>;

    /// Get all accounts (empty when the store is empty)
    async fn get_accounts(&self) -> Result<Vec<Account>>;

    /// Overwrite the names and balance of an existing account
    async fn update_account(&self, account: &Account) -> Result<()>;

    /// Delete an account
    async fn delete_account(&self, id: AccountId) -> Result<()>;

    /// Cheap round trip proving the store answers queries
    async fn ping(&self) -> Result<()>;
}
