//! Draw endpoint.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use randwell_core::protocol::{RandomNumber, RandomRequest};
use randwell_core::range;

use crate::api::status_for;
use crate::app_state::AppState;

/// GET /random?start=..&end=..
///
/// Draws one value into the requested range. Every rejection responds with
/// an empty body; the served counter moves only on a 200.
pub async fn draw(
    State(state): State<AppState>,
    params: Result<Query<RandomRequest>, QueryRejection>,
) -> Response {
    let Query(req) = match params {
        Ok(q) => q,
        Err(rejection) => {
            tracing::debug!(%rejection, "draw query did not bind");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let number = match range::draw(state.source(), req.start, req.end) {
        Ok(n) => n,
        Err(err) => {
            tracing::debug!(start = req.start, end = req.end, %err, "draw rejected");
            return status_for(&err).into_response();
        }
    };

    // Serialize before touching the counter: only a written 200 counts.
    let body = match serde_json::to_vec(&RandomNumber { number }) {
        Ok(b) => b,
        Err(err) => {
            tracing::error!(%err, "draw response failed to serialize");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    state.record_served();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Method fallback for `/random`: anything but GET is logged and rejected.
pub async fn method_not_allowed(method: Method) -> StatusCode {
    tracing::debug!(%method, "draw rejected: method not allowed");
    StatusCode::METHOD_NOT_ALLOWED
}
