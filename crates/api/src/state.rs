use std::sync::Arc;

use catalog_core::repositories::{DirectorRepository, MovieRepository};
use catalog_core::use_cases::director::DirectorUseCases;
use catalog_core::use_cases::movie::MovieUseCases;

use crate::cache::{CacheStore, ResponseCache};
use crate::config::ServerConfig;
use crate::rate_limit::{RateLimitStore, RateLimiter};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used for health checks and shutdown.
    pub pool: catalog_db::DbPool,
    pub config: Arc<ServerConfig>,
    pub movies: MovieUseCases,
    pub directors: DirectorUseCases,
    pub cache: ResponseCache,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    /// Composition root: build every use case and middleware service from
    /// the given repositories and stores.
    pub fn wire(
        pool: catalog_db::DbPool,
        config: Arc<ServerConfig>,
        movie_repo: Arc<dyn MovieRepository>,
        director_repo: Arc<dyn DirectorRepository>,
        cache_store: Arc<dyn CacheStore>,
        limiter_store: Arc<dyn RateLimitStore>,
    ) -> Self {
        let cache = ResponseCache::new(
            cache_store,
            config.cache.ttl,
            config.app_name.clone(),
            config.caching_enabled(),
        );
        let rate_limiter = RateLimiter::new(limiter_store, config.rate_limit, config.rate_limiting_enabled());

        Self {
            pool,
            movies: MovieUseCases::new(movie_repo, director_repo.clone()),
            directors: DirectorUseCases::new(director_repo),
            cache,
            rate_limiter,
            config,
        }
    }
}
