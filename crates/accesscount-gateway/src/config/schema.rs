use serde::Deserialize;

use accesscount_core::error::{AccessCountError, Result};
use accesscount_core::keys::{KeySchema, DEFAULT_KEY_PREFIX};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub access_count: AccessCountSection,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AccessCountError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.access_count.validate()?;

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            access_count: AccessCountSection::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<std::net::SocketAddr>().is_err() {
            return Err(AccessCountError::BadRequest(
                "gateway.listen must be a valid socket address".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessCountSection {
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Full override of the PV hash key name.
    #[serde(default)]
    pub pv_key: Option<String>,

    /// Full override of the endpoint hash key name.
    #[serde(default)]
    pub endpoint_key: Option<String>,

    /// Redis connection URL. Absent means the writer degrades to logged
    /// no-ops and reports fail unless a URL is supplied another way.
    #[serde(default)]
    pub redis_url: Option<String>,
}

impl Default for AccessCountSection {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            pv_key: None,
            endpoint_key: None,
            redis_url: None,
        }
    }
}

impl AccessCountSection {
    pub fn validate(&self) -> Result<()> {
        if self.key_prefix.is_empty() {
            return Err(AccessCountError::BadRequest(
                "access_count.key_prefix must not be empty".into(),
            ));
        }
        for (name, value) in [
            ("access_count.pv_key", &self.pv_key),
            ("access_count.endpoint_key", &self.endpoint_key),
            ("access_count.redis_url", &self.redis_url),
        ] {
            if matches!(value.as_deref(), Some("")) {
                return Err(AccessCountError::BadRequest(format!(
                    "{name} must not be empty when set"
                )));
            }
        }
        Ok(())
    }

    /// Resolved hash key names for this config.
    pub fn keys(&self) -> KeySchema {
        KeySchema::with_overrides(
            &self.key_prefix,
            self.pv_key.clone(),
            self.endpoint_key.clone(),
        )
    }
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.into()
}
