//! Wire contracts for the HTTP surface.
//!
//! Field names here are part of the public API: query parameters bind
//! case-sensitively to `start`/`end`, and the draw response serializes its
//! value under the capitalized `Number` key.

use serde::{Deserialize, Serialize};

/// Query parameters for a draw.
///
/// Missing parameters bind as zero and are rejected by validation; unknown
/// keys are rejected outright.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomRequest {
    #[serde(default)]
    pub start: i64,
    #[serde(default)]
    pub end: i64,
}

/// Draw response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct RandomNumber {
    /// The mapped draw value.
    #[serde(rename = "Number")]
    pub number: i64,
}

/// Health probe response body.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Always "ok" while the process serves traffic.
    pub status: &'static str,
    /// Draws served successfully since process start.
    pub requests: i64,
}
