/// Transfer request type
use super::account::AccountNumber;
use serde::{Deserialize, Serialize};

/// Request to move funds to another account
///
/// Transfers have no settlement logic; the server echoes the request back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Recipient account number
    pub to_account: AccountNumber,

    /// Amount in minor units
    pub amount: i64,
}
