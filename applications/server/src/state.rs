/// Shared application state
use crate::services::TokenService;
use ledger_core::AccountStorage;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStorage>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStorage>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }
}
