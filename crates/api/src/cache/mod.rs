//! Response cache storage.
//!
//! [`ResponseCache`] stores serialised JSON bodies under namespaced keys in a
//! pluggable [`CacheStore`]. Redis is used when configured and reachable;
//! otherwise an in-process store takes its place behind the same interface.

mod memory_store;
mod redis_store;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

pub use self::memory_store::MemoryCacheStore;
pub use self::redis_store::RedisCacheStore;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),
}

/// Key-value storage with per-entry expiry.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    /// Drop every entry owned by this store.
    async fn clear(&self) -> Result<(), CacheError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// The process-wide response cache handed to middleware and handlers.
#[derive(Clone)]
pub struct ResponseCache {
    store: Arc<dyn CacheStore>,
    default_ttl: Duration,
    namespace: String,
    enabled: bool,
}

impl ResponseCache {
    pub fn new(store: Arc<dyn CacheStore>, default_ttl: Duration, namespace: impl Into<String>, enabled: bool) -> Self {
        Self {
            store,
            default_ttl,
            namespace: namespace.into(),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Namespaced storage key for a request-derived key.
    pub fn key_for(&self, key: &str) -> String {
        format!("{}:{key}", self.namespace)
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.store.get(key).await
    }

    /// Store `value`, falling back to the default TTL.
    pub async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<(), CacheError> {
        self.store.set(key, value, ttl.unwrap_or(self.default_ttl)).await
    }

    pub async fn clear(&self) -> Result<(), CacheError> {
        self.store.clear().await
    }

    /// Best-effort invalidation after a write. Failures are logged only.
    pub async fn invalidate(&self) {
        if !self.enabled {
            return;
        }
        if let Err(err) = self.store.clear().await {
            tracing::warn!(backend = self.store.backend(), error = %err, "Cache invalidation failed");
        }
    }
}

/// Pick the cache store for this process.
///
/// Redis is tried first when configured; a connection failure falls back
/// to the in-process store with a warning.
pub async fn connect_cache_store(config: &ServerConfig) -> Arc<dyn CacheStore> {
    if let Some(redis) = &config.redis {
        match RedisCacheStore::connect(&redis.url(), &config.app_name).await {
            Ok(store) => {
                tracing::info!(host = %redis.host, port = redis.port, "Using Redis cache store");
                return Arc::new(store);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Redis cache unavailable, falling back to in-memory store");
            }
        }
    }
    tracing::info!(max_items = config.cache.max_items, "Using in-memory cache store");
    Arc::new(MemoryCacheStore::new(config.cache.max_items))
}
