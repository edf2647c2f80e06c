//! Bound validation and modulus reduction.
//!
//! The modulus is `end - start - 1`, not `end - start + 1`: `end` and
//! `end - 1` are unreachable, and valid outputs span `[start, end - 2]`.
//! Spans where the modulus would be zero or negative are rejected before
//! the arithmetic runs.

use crate::error::{RandwellError, Result};
use crate::source::RandomSource;

/// Validate draw bounds. Checks run in a fixed order; the first failure wins.
pub fn validate_bounds(start: i64, end: i64) -> Result<()> {
    if start == 0 || end == 0 {
        return Err(RandwellError::BadRequest(
            "start and end must be non-zero".into(),
        ));
    }
    if start < 0 || end < 0 {
        return Err(RandwellError::BadRequest(
            "start and end must be positive".into(),
        ));
    }
    if start > end {
        return Err(RandwellError::BadRequest(
            "start must not exceed end".into(),
        ));
    }
    Ok(())
}

/// Reduce a raw draw into `[start, end - 2]`.
///
/// Spans of zero (`end == start + 1`) or below (`end == start`, which
/// bound validation permits) are rejected here.
pub fn map_to_range(raw: i64, start: i64, end: i64) -> Result<i64> {
    let span = end - start - 1;
    if span <= 0 {
        return Err(RandwellError::DegenerateRange { start, end });
    }
    Ok(raw % span + start)
}

/// Validate bounds, pull one raw value, and map it into the range.
pub fn draw(source: &dyn RandomSource, start: i64, end: i64) -> Result<i64> {
    validate_bounds(start, end)?;
    let raw = source.next63();
    map_to_range(raw, start, end)
}
