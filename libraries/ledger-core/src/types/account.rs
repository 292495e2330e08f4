/// Account domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage-assigned account identifier
pub type AccountId = i64;

/// Human-facing account number, storage-assigned and unique
pub type AccountNumber = i64;

/// Bank account record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account identifier (0 until persisted)
    pub id: AccountId,

    /// Holder's first name
    pub first_name: String,

    /// Holder's last name
    pub last_name: String,

    /// Account number (0 until persisted)
    pub number: AccountNumber,

    /// Balance in minor units
    pub balance: i64,

    /// When the account was opened
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new, not yet persisted account
    ///
    /// Names are taken as given; empty names are accepted.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            number: 0,
            balance: 0,
            created_at: Utc::now(),
        }
    }

    /// Whether the store has assigned an id to this account
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

/// Request body for opening an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// Holder's first name
    pub first_name: String,

    /// Holder's last name
    pub last_name: String,
}

impl From<CreateAccountRequest> for Account {
    fn from(req: CreateAccountRequest) -> Self {
        Account::new(req.first_name, req.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_defaults() {
        let before = Utc::now();
        let account = Account::new("Ada", "Lovelace");
        let after = Utc::now();

        assert_eq!(account.id, 0);
        assert_eq!(account.number, 0);
        assert_eq!(account.balance, 0);
        assert!(!account.is_persisted());
        assert!(account.created_at >= before && account.created_at <= after);
    }

    #[test]
    fn test_empty_names_are_accepted() {
        let account = Account::new("", "");
        assert!(account.first_name.is_empty());
        assert!(account.last_name.is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let account = Account::new("Ada", "Lovelace");
        let json = serde_json::to_value(&account).unwrap();

        for field in ["id", "firstName", "lastName", "number", "balance", "createdAt"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(json["firstName"], "Ada");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_create_request_requires_both_names() {
        let ok: CreateAccountRequest =
            serde_json::from_str(r#"{"firstName":"Ada","lastName":"Lovelace"}"#).unwrap();
        let account = Account::from(ok);
        assert_eq!(account.last_name, "Lovelace");

        let missing = serde_json::from_str::<CreateAccountRequest>(r#"{"firstName":"Ada"}"#);
        assert!(missing.is_err());
    }
}
