//! Top-level facade crate for randwell.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use randwell_core::*;
}

pub mod server {
    pub use randwell_server::*;
}
