//! Fixed-window rate limiting keyed by client address and tier.
//!
//! Every request counts against the default tier; POST, PUT and PATCH count
//! against the stricter write tier instead. Counters live in a pluggable
//! [`RateLimitStore`] so several instances can share them through Redis.

mod memory_store;
mod redis_store;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::Method;

pub use self::memory_store::MemoryRateLimitStore;
pub use self::redis_store::RedisRateLimitStore;

use crate::config::{RateLimitConfig, RateLimitTier, ServerConfig};

/// Path fragments that are never limited.
const EXEMPT_PATHS: [&str; 3] = ["/health", "/metrics", "/api-docs"];

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Rate limit store error: {0}")]
    Backend(String),
}

/// Counter state after recording one hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHit {
    /// Hits in the current window, this one included.
    pub count: u64,
    /// Time until the window resets.
    pub reset_in: Duration,
}

#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Record a hit on `key`, opening a new window of length `window` when
    /// none is active.
    async fn hit(&self, key: &str, window: Duration) -> Result<WindowHit, RateLimitError>;

    /// Release resources held by the store.
    async fn close(&self) -> Result<(), RateLimitError>;

    fn backend(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Default,
    Write,
}

impl Tier {
    pub fn for_method(method: &Method) -> Self {
        if method == Method::POST || method == Method::PUT || method == Method::PATCH {
            Tier::Write
        } else {
            Tier::Default
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Default => "default",
            Tier::Write => "write",
        }
    }
}

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The request is not subject to limiting.
    Skipped,
    Allowed { limit: u64, remaining: u64, reset_in: Duration },
    Limited { limit: u64, reset_in: Duration },
}

pub fn is_exempt(path: &str) -> bool {
    EXEMPT_PATHS.iter().any(|fragment| path.contains(fragment))
}

#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<dyn RateLimitStore>,
    config: RateLimitConfig,
    enabled: bool,
}

impl RateLimiter {
    pub fn new(store: Arc<dyn RateLimitStore>, config: RateLimitConfig, enabled: bool) -> Self {
        Self { store, config, enabled }
    }

    fn tier(&self, tier: Tier) -> RateLimitTier {
        match tier {
            Tier::Default => self.config.default,
            Tier::Write => self.config.write,
        }
    }

    /// Count one request from `client` and decide whether it may proceed.
    ///
    /// Store failures let the request through.
    pub async fn check(&self, client: &str, method: &Method, path: &str) -> Decision {
        if !self.enabled || is_exempt(path) {
            return Decision::Skipped;
        }

        let tier = Tier::for_method(method);
        let policy = self.tier(tier);
        let key = format!("{client}-{}", tier.as_str());

        match self.store.hit(&key, policy.window).await {
            Ok(hit) if hit.count > policy.limit => {
                tracing::warn!(client, tier = tier.as_str(), count = hit.count, "Rate limit exceeded");
                Decision::Limited {
                    limit: policy.limit,
                    reset_in: hit.reset_in,
                }
            }
            Ok(hit) => Decision::Allowed {
                limit: policy.limit,
                remaining: policy.limit - hit.count,
                reset_in: hit.reset_in,
            },
            Err(err) => {
                tracing::warn!(backend = self.store.backend(), error = %err, "Rate limit store failed, allowing request");
                Decision::Skipped
            }
        }
    }

    pub async fn close(&self) -> Result<(), RateLimitError> {
        self.store.close().await
    }
}

/// Pick the limiter store for this process, preferring Redis when
/// configured and reachable.
pub async fn connect_rate_limit_store(config: &ServerConfig) -> Arc<dyn RateLimitStore> {
    if let Some(redis) = &config.redis {
        let prefix = format!("{}:rate-limit", config.app_name);
        match RedisRateLimitStore::connect(&redis.url(), &prefix).await {
            Ok(store) => {
                tracing::info!(host = %redis.host, port = redis.port, "Using Redis rate-limit store");
                return Arc::new(store);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Redis rate-limit store unavailable, falling back to in-memory store");
            }
        }
    }
    Arc::new(MemoryRateLimitStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    struct FailingStore;

    #[async_trait]
    impl RateLimitStore for FailingStore {
        async fn hit(&self, _key: &str, _window: Duration) -> Result<WindowHit, RateLimitError> {
            Err(RateLimitError::Backend("connection refused".into()))
        }

        async fn close(&self) -> Result<(), RateLimitError> {
            Ok(())
        }

        fn backend(&self) -> &'static str {
            "failing"
        }
    }

    fn config() -> RateLimitConfig {
        RateLimitConfig {
            default: RateLimitTier {
                window: Duration::from_secs(60),
                limit: 3,
            },
            write: RateLimitTier {
                window: Duration::from_secs(30),
                limit: 1,
            },
        }
    }

    #[test]
    fn write_methods_use_write_tier() {
        assert_eq!(Tier::for_method(&Method::POST), Tier::Write);
        assert_eq!(Tier::for_method(&Method::PUT), Tier::Write);
        assert_eq!(Tier::for_method(&Method::PATCH), Tier::Write);
        assert_eq!(Tier::for_method(&Method::GET), Tier::Default);
        assert_eq!(Tier::for_method(&Method::DELETE), Tier::Default);
    }

    #[test]
    fn exempt_paths() {
        assert!(is_exempt("/health"));
        assert!(is_exempt("/api/v1/metrics"));
        assert!(is_exempt("/api-docs/openapi.json"));
        assert!(!is_exempt("/api/v1/movies"));
    }

    #[tokio::test]
    async fn limits_after_ceiling_per_tier() {
        let limiter = RateLimiter::new(Arc::new(MemoryRateLimitStore::new()), config(), true);

        assert_matches!(
            limiter.check("1.2.3.4", &Method::POST, "/api/v1/movies").await,
            Decision::Allowed { remaining: 0, .. }
        );
        assert_matches!(
            limiter.check("1.2.3.4", &Method::POST, "/api/v1/movies").await,
            Decision::Limited { limit: 1, .. }
        );
        // The default tier and other clients are counted separately.
        assert_matches!(
            limiter.check("1.2.3.4", &Method::GET, "/api/v1/movies").await,
            Decision::Allowed { remaining: 2, .. }
        );
        assert_matches!(
            limiter.check("5.6.7.8", &Method::POST, "/api/v1/movies").await,
            Decision::Allowed { .. }
        );
    }

    #[tokio::test]
    async fn disabled_or_exempt_requests_are_skipped() {
        let disabled = RateLimiter::new(Arc::new(MemoryRateLimitStore::new()), config(), false);
        assert_eq!(disabled.check("ip", &Method::POST, "/api/v1/movies").await, Decision::Skipped);

        let enabled = RateLimiter::new(Arc::new(MemoryRateLimitStore::new()), config(), true);
        for _ in 0..10 {
            assert_eq!(enabled.check("ip", &Method::GET, "/health").await, Decision::Skipped);
        }
    }

    #[tokio::test]
    async fn store_failure_lets_requests_through() {
        let limiter = RateLimiter::new(Arc::new(FailingStore), config(), true);
        assert_eq!(limiter.check("ip", &Method::POST, "/api/v1/movies").await, Decision::Skipped);
    }
}
