/// API route modules
pub mod accounts;
pub mod health;
pub mod transfer;
