//! Shared error type across accesscount crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, AccessCountError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum AccessCountError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("config: {0}")]
    Config(String),
    #[error("store: {0}")]
    Store(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}
