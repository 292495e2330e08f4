//! In-memory account store

use crate::FIRST_ACCOUNT_NUMBER;
use async_trait::async_trait;
use ledger_core::{
    error::{LedgerError, Result},
    storage::AccountStorage,
    types::{Account, AccountId, AccountNumber},
};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Inner {
    accounts: BTreeMap<AccountId, Account>,
    next_id: AccountId,
    next_number: AccountNumber,
}

/// Account store that keeps everything in process memory
///
/// Assigns ids from 1 and numbers from [`FIRST_ACCOUNT_NUMBER`], like the
/// `SQLite` store. Deleted ids and numbers are never reused.
#[derive(Debug)]
pub struct MemoryAccountStore {
    inner: RwLock<Inner>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                accounts: BTreeMap::new(),
                next_id: 1,
                next_number: FIRST_ACCOUNT_NUMBER,
            }),
        }
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStorage for MemoryAccountStore {
    async fn create_account(&self, account: &Account) -> Result<AccountId> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        let number = inner.next_number;
        inner.next_id += 1;
        inner.next_number += 1;

        let stored = Account {
            id,
            number,
            ..account.clone()
        };
        inner.accounts.insert(id, stored);

        Ok(id)
    }

    async fn get_account_by_id(&self, id: AccountId) -> Result<Account> {
        self.inner
            .read()
            .await
            .accounts
            .get(&id)
            .cloned()
            .ok_or_else(|| LedgerError::not_found("Account", id))
    }

    async fn get_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.inner.read().await.accounts.values().cloned().collect())
    }

    async fn update_account(&self, account: &Account) -> Result<()> {
        let mut inner = self.inner.write().await;
        let stored = inner
            .accounts
            .get_mut(&account.id)
            .ok_or_else(|| LedgerError::not_found("Account", account.id))?;

        stored.first_name.clone_from(&account.first_name);
        stored.last_name.clone_from(&account.last_name);
        stored.balance = account.balance;

        Ok(())
    }

    async fn delete_account(&self, id: AccountId) -> Result<()> {
        self.inner
            .write()
            .await
            .accounts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| LedgerError::not_found("Account", id))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_assigns_ids_and_numbers() {
        let store = MemoryAccountStore::new();

        let first = store.create_account(&Account::new("Ada", "Lovelace")).await.unwrap();
        let second = store.create_account(&Account::new("Alan", "Turing")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);

        let ada = store.get_account_by_id(first).await.unwrap();
        let alan = store.get_account_by_id(second).await.unwrap();
        assert_eq!(ada.number, FIRST_ACCOUNT_NUMBER);
        assert_eq!(alan.number, FIRST_ACCOUNT_NUMBER + 1);
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = MemoryAccountStore::new();
        assert!(store.get_accounts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_account_is_not_found() {
        let store = MemoryAccountStore::new();

        let err = store.get_account_by_id(99).await.unwrap_err();
        assert!(err.is_not_found());

        let err = store.delete_account(99).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let store = MemoryAccountStore::new();
        let id = store.create_account(&Account::new("Ada", "Lovelace")).await.unwrap();

        let mut account = store.get_account_by_id(id).await.unwrap();
        account.last_name = "King".to_string();
        account.balance = 250;
        store.update_account(&account).await.unwrap();

        let updated = store.get_account_by_id(id).await.unwrap();
        assert_eq!(updated.last_name, "King");
        assert_eq!(updated.balance, 250);
        assert_eq!(updated.number, account.number);

        store.delete_account(id).await.unwrap();
        assert!(store.get_accounts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_newest_number_not_reused_after_delete() {
        let store = MemoryAccountStore::new();
        let first = store.create_account(&Account::new("Ada", "Lovelace")).await.unwrap();
        let removed = store.get_account_by_id(first).await.unwrap();

        store.delete_account(first).await.unwrap();
        let second = store.create_account(&Account::new("Alan", "Turing")).await.unwrap();

        let account = store.get_account_by_id(second).await.unwrap();
        assert!(account.number > removed.number);
    }
}
