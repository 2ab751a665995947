//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use accesscount_core::error::{AccessCountError, Result};

pub use schema::{AccessCountSection, AppConfig, GatewaySection};

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| AccessCountError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AppConfig> {
    let cfg: AppConfig = serde_yaml::from_str(s)
        .map_err(|e| AccessCountError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
