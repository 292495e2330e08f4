/// Account token middleware
use crate::{
    error::{ApiError, Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{FromRequestParts, Path, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use ledger_core::{Account, AccountId};

/// Request header carrying the account token
pub const TOKEN_HEADER: &str = "x-jwt-token";

/// Body of every rejection; which check failed is only logged
pub const REJECTION_MESSAGE: &str = "invalid token";

/// Account the request's token was checked against
///
/// Inserted into request extensions by [`auth_middleware`].
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount(pub Account);

impl AuthenticatedAccount {
    pub fn into_inner(self) -> Account {
        self.0
    }
}

/// Check that `token` grants access to the account at path segment `raw_id`
///
/// Returns the loaded account on success. Each failed check has its own
/// error so callers can tell a bad token from a missing account or a token
/// issued for a different account.
pub async fn authorize(state: &AppState, token: Option<&str>, raw_id: &str) -> Result<Account> {
    let token = token.ok_or(ServerError::MissingToken)?;
    let claims = state.tokens.validate_token(token)?;

    let id: AccountId = raw_id
        .parse()
        .map_err(|_| ServerError::Validation(format!("invalid account id {raw_id:?}")))?;

    let account = state.store.get_account_by_id(id).await?;

    if account.number != claims.account_number {
        return Err(ServerError::AuthorizationMismatch {
            claimed: claims.account_number,
            actual: account.number,
        });
    }

    Ok(account)
}

/// Middleware guarding `/account/:id`
///
/// Must be installed with `route_layer` so the path parameter is available.
pub async fn auth_middleware(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned);

    match authorize(&state, token.as_deref(), &id).await {
        Ok(account) => {
            tracing::debug!(account_id = account.id, "Token accepted");
            request
                .extensions_mut()
                .insert(AuthenticatedAccount(account));
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!(account_id = %id, "Rejected account request: {}", e);
            forbidden()
        }
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthenticatedAccount
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<AuthenticatedAccount>()
            .cloned()
            .ok_or(ServerError::MissingToken)
    }
}

fn forbidden() -> Response {
    (StatusCode::FORBIDDEN, Json(ApiError::new(REJECTION_MESSAGE))).into_response()
}
