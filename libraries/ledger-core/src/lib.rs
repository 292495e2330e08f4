//! Ledger Core
//!
//! Domain types, the storage port, and error handling shared by the ledger
//! storage backends and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Account`, `CreateAccountRequest`, `TransferRequest`
//! - **Storage Port**: the `AccountStorage` trait implemented by storage backends
//! - **Error Handling**: Unified `LedgerError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use ledger_core::types::Account;
//!
//! let account = Account::new("Ada", "Lovelace");
//! assert_eq!(account.balance, 0);
//! assert_eq!(account.id, 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

pub use error::{LedgerError, Result};
pub use storage::AccountStorage;
#[cfg(feature = "mocks")]
pub use storage::MockAccountStorage;

pub use types::{Account, AccountId, AccountNumber, CreateAccountRequest, TransferRequest};
