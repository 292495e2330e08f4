use crate::{accounts, StorageError};
use async_trait::async_trait;
use ledger_core::{
    error::Result,
    storage::AccountStorage,
    types::{Account, AccountId},
};
use sqlx::SqlitePool;

/// Account store backed by `SQLite`
#[derive(Clone)]
pub struct SqliteAccountStore {
    pool: SqlitePool,
}

impl SqliteAccountStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl AccountStorage for SqliteAccountStore {
    async fn create_account(&self, account: &Account) -> Result<AccountId> {
        Ok(accounts::create(&self.pool, account).await?)
    }

    async fn get_account_by_id(&self, id: AccountId) -> Result<Account> {
        Ok(accounts::get_by_id(&self.pool, id).await?)
    }

    async fn get_accounts(&self) -> Result<Vec<Account>> {
        Ok(accounts::get_all(&self.pool).await?)
    }

    async fn update_account(&self, account: &Account) -> Result<()> {
        Ok(accounts::update(&self.pool, account).await?)
    }

    async fn delete_account(&self, id: AccountId) -> Result<()> {
        Ok(accounts::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }
}
