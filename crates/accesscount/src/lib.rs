//! Top-level facade crate for accesscount.
//!
//! Re-exports core types and the gateway library so users can depend on a
//! single crate.

pub mod core {
    pub use accesscount_core::*;
}

pub mod gateway {
    pub use accesscount_gateway::*;
}
