/// Request body extraction
use crate::error::ServerError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body extractor whose failures go through [`ServerError`]
///
/// The body is parsed whatever the `Content-Type` header says, so clients
/// that omit the header are still served.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ServerError::Decode(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(ApiJson)
            .map_err(|e| ServerError::Decode(e.to_string()))
    }
}
