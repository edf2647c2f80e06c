//! HTTP endpoint handlers.

pub mod health;
pub mod random;

use axum::http::StatusCode;

use randwell_core::RandwellError;

/// Status served for a core error. Error bodies stay empty.
pub(crate) fn status_for(err: &RandwellError) -> StatusCode {
    StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
