//! Shared application state for the gateway binary.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::counter::AccessCounter;
use crate::store::{CounterStore, RedisStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AppConfig,
    counter: AccessCounter,
}

impl AppState {
    /// Build state, connecting to redis when a URL is configured.
    ///
    /// A connect failure disables counting instead of failing boot: the
    /// writer degrades to logged no-ops while requests keep being served.
    pub async fn new(cfg: AppConfig) -> Self {
        let store: Option<Arc<dyn CounterStore>> = match cfg.access_count.redis_url.as_deref() {
            Some(url) => match RedisStore::connect(url).await {
                Ok(store) => Some(Arc::new(store)),
                Err(e) => {
                    tracing::error!(error = %e, "redis connect failed, counting disabled");
                    None
                }
            },
            None => None,
        };
        Self::with_store(cfg, store)
    }

    /// Build state around an existing store handle (or none).
    pub fn with_store(cfg: AppConfig, store: Option<Arc<dyn CounterStore>>) -> Self {
        let counter = AccessCounter::new(store, cfg.access_count.keys());
        Self {
            inner: Arc::new(AppStateInner { cfg, counter }),
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    pub fn counter(&self) -> &AccessCounter {
        &self.inner.counter
    }
}
