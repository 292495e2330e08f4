/// Server services
pub mod token;

pub use token::{TokenClaims, TokenService};
