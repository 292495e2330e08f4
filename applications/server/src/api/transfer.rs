/// Transfer API routes
use crate::{error::Result, extract::ApiJson};
use axum::Json;
use ledger_core::TransferRequest;

/// POST /transfer
///
/// Echoes the decoded request; nothing is persisted.
pub async fn transfer(ApiJson(req): ApiJson<TransferRequest>) -> Result<Json<TransferRequest>> {
    tracing::debug!(to_account = req.to_account, amount = req.amount, "Transfer requested");
    Ok(Json(req))
}
