//! randwell server library entry.
//!
//! This crate wires config, shared state, and the two-endpoint HTTP surface
//! into a runnable service. It is intended to be consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod router;
