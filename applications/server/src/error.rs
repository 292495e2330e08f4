/// Server error types
use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use ledger_core::{AccountNumber, LedgerError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("token expired at {expires_at}")]
    TokenExpired { expires_at: i64 },

    #[error("missing token")]
    MissingToken,

    #[error("token issued for account {claimed}, requested account is {actual}")]
    AuthorizationMismatch {
        claimed: AccountNumber,
        actual: AccountNumber,
    },

    #[error("method not allowed {0}")]
    MethodNotAllowed(Method),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// JSON error body: `{"Error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "Error")]
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl ServerError {
    /// Message returned to the client
    ///
    /// Persistence failures are logged in full and reported without driver
    /// details.
    fn client_message(&self) -> String {
        match self {
            ServerError::Ledger(LedgerError::Persistence(msg)) => {
                tracing::error!("Persistence error: {}", msg);
                "database error".to_string()
            }
            ServerError::Config(msg) => {
                tracing::error!("Config error: {}", msg);
                "configuration error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    // Handler errors all map to 400; auth rejections are answered by the
    // middleware before a handler runs.
    fn into_response(self) -> Response {
        let body = Json(ApiError::new(self.client_message()));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
