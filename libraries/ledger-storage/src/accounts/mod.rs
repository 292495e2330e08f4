//! Account queries

use crate::error::{Result, StorageError};
use chrono::{DateTime, Utc};
use ledger_core::types::{Account, AccountId, AccountNumber};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Insert a new account
///
/// The id comes from the primary key and the number from the
/// `account_number_seq` counter, taken in the same transaction as the insert.
/// The counter only moves forward, so numbers of deleted accounts are never
/// handed out again. Both values on `account` are ignored.
///
/// # Returns
///
/// The assigned account id
pub async fn create(pool: &SqlitePool, account: &Account) -> Result<AccountId> {
    let mut tx = pool.begin().await?;

    // Writing first takes the write lock before anything is read
    let number: AccountNumber = sqlx::query(
        "UPDATE account_number_seq SET next_number = next_number + 1
         WHERE id = 1
         RETURNING next_number - 1 AS number",
    )
    .fetch_one(&mut *tx)
    .await?
    .try_get("number")?;

    let row = sqlx::query(
        "INSERT INTO accounts (first_name, last_name, number, balance, created_at)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id",
    )
    .bind(&account.first_name)
    .bind(&account.last_name)
    .bind(number)
    .bind(account.balance)
    .bind(account.created_at.timestamp_millis())
    .fetch_one(&mut *tx)
    .await?;

    let id: AccountId = row.try_get("id")?;
    tx.commit().await?;

    Ok(id)
}

/// Get an account by ID
pub async fn get_by_id(pool: &SqlitePool, id: AccountId) -> Result<Account> {
    let row = sqlx::query(
        "SELECT id, first_name, last_name, number, balance, created_at
         FROM accounts WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| StorageError::not_found("Account", id))?;

    from_row(&row)
}

/// Get all accounts, oldest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Account>> {
    let rows = sqlx::query(
        "SELECT id, first_name, last_name, number, balance, created_at
         FROM accounts ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}

/// Overwrite names and balance of an existing account
pub async fn update(pool: &SqlitePool, account: &Account) -> Result<()> {
    let result = sqlx::query(
        "UPDATE accounts SET first_name = ?, last_name = ?, balance = ? WHERE id = ?",
    )
    .bind(&account.first_name)
    .bind(&account.last_name)
    .bind(account.balance)
    .bind(account.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Account", account.id));
    }

    Ok(())
}

/// Delete an account
pub async fn delete(pool: &SqlitePool, id: AccountId) -> Result<()> {
    let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Account", id));
    }

    Ok(())
}

fn from_row(row: &SqliteRow) -> Result<Account> {
    let created_at_ms: i64 = row.try_get("created_at")?;
    let created_at = DateTime::<Utc>::from_timestamp_millis(created_at_ms)
        .ok_or_else(|| StorageError::CorruptRow(format!("invalid timestamp {created_at_ms}")))?;

    Ok(Account {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        number: row.try_get("number")?,
        balance: row.try_get("balance")?,
        created_at,
    })
}
