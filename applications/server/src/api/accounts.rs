/// Account API routes
use crate::{
    error::{Result, ServerError},
    extract::ApiJson,
    middleware::AuthenticatedAccount,
    state::AppState,
};
use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    Json,
};
use ledger_core::{Account, CreateAccountRequest};

/// GET /account
pub async fn list_accounts(State(app_state): State<AppState>) -> Result<Json<Vec<Account>>> {
    let accounts = app_state.store.get_accounts().await?;
    Ok(Json(accounts))
}

/// POST /account
///
/// The issued token is logged, not returned in the response body.
pub async fn create_account(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<CreateAccountRequest>,
) -> Result<(StatusCode, Json<Account>)> {
    let account = Account::from(req);

    let id = app_state.store.create_account(&account).await?;
    let account = app_state.store.get_account_by_id(id).await?;

    let token = app_state.tokens.issue_token(&account)?;
    tracing::info!(
        account_id = account.id,
        account_number = account.number,
        token = %token,
        "Account created"
    );

    Ok((StatusCode::CREATED, Json(account)))
}

/// DELETE /account
///
/// Accounts are not deleted over HTTP; this answers 200 with an empty body.
pub async fn delete_account() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
    )
}

/// GET /account/:id
///
/// Answers with the account the token middleware already loaded.
pub async fn get_account(account: AuthenticatedAccount) -> Json<Account> {
    Json(account.into_inner())
}

/// Fallback for methods the account routes do not serve
pub async fn method_not_allowed(method: Method) -> ServerError {
    ServerError::MethodNotAllowed(method)
}
