mod account;
mod transfer;

pub use account::{Account, AccountId, AccountNumber, CreateAccountRequest};
pub use transfer::TransferRequest;
