/// Health check API routes
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: &'static str,
    pub version: &'static str,
}

/// GET /health - 200 while the store answers a ping, 503 otherwise
pub async fn health(State(app_state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, storage, code) = match app_state.store.ping().await {
        Ok(_) => ("ok", "up", StatusCode::OK),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            ("degraded", "down", StatusCode::SERVICE_UNAVAILABLE)
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            storage,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
