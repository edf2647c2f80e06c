//! Health probe.

use axum::extract::State;
use axum::Json;

use randwell_core::protocol::HealthStatus;

use crate::app_state::AppState;

/// GET /health
///
/// Liveness plus the number of draws served since process start.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        requests: state.served(),
    })
}
