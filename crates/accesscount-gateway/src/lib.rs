//! accesscount gateway library entry.
//!
//! This crate wires the config layer, store handles, counting middleware,
//! and report rendering into the pieces consumed by the binaries and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod counter;
pub mod hook;
pub mod report;
pub mod router;
pub mod store;
