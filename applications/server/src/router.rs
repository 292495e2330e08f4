/// HTTP routing
use crate::{api, middleware, state::AppState};
use axum::{
    http::HeaderName,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::iter;
use tower_http::{
    cors::CorsLayer,
    sensitive_headers::SetSensitiveRequestHeadersLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// `GET /account/:id` is the only route behind the token middleware.
pub fn create_router(app_state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/account",
            get(api::accounts::list_accounts)
                .post(api::accounts::create_account)
                .delete(api::accounts::delete_account)
                .fallback(api::accounts::method_not_allowed),
        )
        .route(
            "/transfer",
            post(api::transfer::transfer).fallback(api::accounts::method_not_allowed),
        );

    let protected_routes = Router::new()
        .route(
            "/account/:id",
            get(api::accounts::get_account).fallback(api::accounts::method_not_allowed),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            middleware::auth_middleware,
        ));

    public_routes
        .merge(protected_routes)
        .with_state(app_state)
}

/// Add request tracing and CORS around `router`
///
/// The token header is marked sensitive before the trace layer sees the
/// request, so spans record it as `Sensitive` instead of its value.
pub fn with_http_layers(router: Router) -> Router {
    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .layer(SetSensitiveRequestHeadersLayer::new(iter::once(
            HeaderName::from_static(middleware::TOKEN_HEADER),
        )))
}
