//! Raw randomness feeding the range mapper.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of raw draw values.
///
/// The server installs [`ClockSeeded`]; tests inject deterministic
/// sequences to pin exact mapped values.
pub trait RandomSource: Send + Sync {
    /// Produce a non-negative 63-bit pseudorandom integer.
    fn next63(&self) -> i64;
}

/// Seeds a fresh generator from the wall clock on every draw.
///
/// Two draws within the same clock tick may be correlated. The per-call
/// generator also leaves the source with no shared mutable state, so it
/// needs no lock.
#[derive(Debug, Default)]
pub struct ClockSeeded;

impl RandomSource for ClockSeeded {
    fn next63(&self) -> i64 {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        let mut rng = StdRng::seed_from_u64(nanos);
        (rng.gen::<u64>() >> 1) as i64
    }
}
