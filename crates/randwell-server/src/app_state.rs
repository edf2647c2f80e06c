//! Shared application state for the randwell server.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use randwell_core::source::{ClockSeeded, RandomSource};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    source: Arc<dyn RandomSource>,
    served: AtomicI64,
}

impl AppState {
    /// Build state with the clock-seeded production source.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_source(cfg, Arc::new(ClockSeeded))
    }

    /// Build state with an injected source (deterministic in tests).
    pub fn with_source(cfg: ServerConfig, source: Arc<dyn RandomSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                source,
                served: AtomicI64::new(0),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn source(&self) -> &dyn RandomSource {
        self.inner.source.as_ref()
    }

    /// Count one successfully served draw. Relaxed ordering: the counter is
    /// a single monotonically increasing cell, nothing is ordered against it.
    pub fn record_served(&self) {
        self.inner.served.fetch_add(1, Ordering::Relaxed);
    }

    /// Current count of successfully served draws.
    pub fn served(&self) -> i64 {
        self.inner.served.load(Ordering::Relaxed)
    }
}
