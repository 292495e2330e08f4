//! Ledger Server Library
//!
//! JSON account ledger over HTTP with token-guarded account lookups.
//!
//! This library exposes the router and its building blocks so the binary and
//! the integration tests assemble the exact same application.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::{create_router, with_http_layers};
pub use services::{TokenClaims, TokenService};
pub use state::AppState;
