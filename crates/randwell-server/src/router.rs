//! Axum router wiring.
//!
//! Two routes plus a logging fallback; everything else is an empty 404.

use axum::http::{StatusCode, Uri};
use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::{api, app_state::AppState};

pub fn build_router(state: AppState) -> Router {
    let timeout = state.cfg().server.request_timeout();

    Router::new()
        .route(
            "/random",
            get(api::random::draw).fallback(api::random::method_not_allowed),
        )
        .route("/health", get(api::health::health))
        .fallback(unmatched)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .with_state(state)
}

/// Unknown paths get an empty 404; the path itself is still traced.
async fn unmatched(uri: Uri) -> StatusCode {
    tracing::debug!(path = %uri.path(), "no route matched");
    StatusCode::NOT_FOUND
}
