//! Key schema for the two counter hashes.
//!
//! Final key names are `{prefix}:AccessCount:pv:hash` and
//! `{prefix}:AccessCount:endpoint:hash`; either name can also be overridden
//! individually in config.

use crate::date::DateBucket;

/// Default namespace prefix.
pub const DEFAULT_KEY_PREFIX: &str = "pluginkit";

/// Resolved names of the two counter hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchema {
    pv_key: String,
    endpoint_key: String,
}

impl KeySchema {
    /// Derive both keys from a namespace prefix.
    pub fn from_prefix(prefix: &str) -> Self {
        Self {
            pv_key: format!("{prefix}:AccessCount:pv:hash"),
            endpoint_key: format!("{prefix}:AccessCount:endpoint:hash"),
        }
    }

    /// Derive from a prefix; explicit per-key overrides win.
    pub fn with_overrides(
        prefix: &str,
        pv_key: Option<String>,
        endpoint_key: Option<String>,
    ) -> Self {
        let derived = Self::from_prefix(prefix);
        Self {
            pv_key: pv_key.unwrap_or(derived.pv_key),
            endpoint_key: endpoint_key.unwrap_or(derived.endpoint_key),
        }
    }

    /// Hash holding date -> total request count.
    pub fn pv_key(&self) -> &str {
        &self.pv_key
    }

    /// Hash holding "date:endpoint" -> per-endpoint request count.
    pub fn endpoint_key(&self) -> &str {
        &self.endpoint_key
    }

    /// Field name for one (day, endpoint) pair.
    pub fn endpoint_field(bucket: DateBucket, endpoint: &str) -> String {
        format!("{}:{}", bucket.storage(), endpoint)
    }

    /// Split an endpoint hash field back into (day, endpoint). The day part
    /// never contains `:`, so the first separator is authoritative even when
    /// the endpoint name itself has colons.
    pub fn split_endpoint_field(field: &str) -> Option<(&str, &str)> {
        field.split_once(':')
    }
}

impl Default for KeySchema {
    fn default() -> Self {
        Self::from_prefix(DEFAULT_KEY_PREFIX)
    }
}
