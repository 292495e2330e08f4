//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use ledger_core::{Account, AccountStorage};
use ledger_server::{create_router, AppState, TokenService};
use ledger_storage::SqliteAccountStore;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key";

/// Router plus direct handles on its store and token service
pub struct TestApp {
    pub router: Router,
    pub store: Arc<dyn AccountStorage>,
    pub tokens: Arc<TokenService>,
}

impl TestApp {
    /// App backed by a migrated in-memory `SQLite` database
    pub async fn new() -> Self {
        let pool = ledger_storage::create_pool("sqlite::memory:").await.unwrap();
        ledger_storage::run_migrations(&pool).await.unwrap();
        Self::with_store(Arc::new(SqliteAccountStore::new(pool)))
    }

    pub fn with_store(store: Arc<dyn AccountStorage>) -> Self {
        let tokens = Arc::new(TokenService::new(TEST_SECRET, 60, false));
        let router = create_router(AppState::new(Arc::clone(&store), Arc::clone(&tokens)));
        Self {
            router,
            store,
            tokens,
        }
    }

    /// Insert an account directly into the store
    pub async fn seed_account(&self, first_name: &str, last_name: &str) -> Account {
        let id = self
            .store
            .create_account(&Account::new(first_name, last_name))
            .await
            .unwrap();
        self.store.get_account_by_id(id).await.unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("x-jwt-token", token);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
