/// Storage-specific errors
use ledger_core::LedgerError;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// A stored value could not be mapped back into a domain type
    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

impl From<StorageError> for LedgerError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => LedgerError::NotFound { entity, id },
            other => LedgerError::persistence(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_stays_distinguishable() {
        let err: LedgerError = StorageError::not_found("Account", 7).into();
        assert_eq!(err, LedgerError::not_found("Account", 7));
    }

    #[test]
    fn test_driver_errors_become_persistence() {
        let err: LedgerError = StorageError::Database(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, LedgerError::Persistence(_)));
    }
}
