/// Request middleware
pub mod auth;

pub use auth::{auth_middleware, authorize, AuthenticatedAccount, TOKEN_HEADER};
