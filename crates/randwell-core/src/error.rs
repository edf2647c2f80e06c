//! Shared error type across randwell crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, RandwellError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum RandwellError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("degenerate range: start={start} end={end}")]
    DegenerateRange { start: i64, end: i64 },
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl RandwellError {
    /// Map internal error to the stable HTTP status served for it.
    /// Error responses carry no body, so the status is the whole contract.
    pub fn http_status(&self) -> u16 {
        match self {
            RandwellError::BadRequest(_) => 400,
            RandwellError::DegenerateRange { .. } => 400,
            RandwellError::UnsupportedVersion => 400,
            RandwellError::Internal(_) => 500,
        }
    }
}
