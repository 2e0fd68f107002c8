//! Route definitions for `/movies`.

use std::time::Duration;

use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::middleware::cache::{cache_response, CacheOptions, CachedRoute};
use crate::state::AppState;

/// List responses stay cached for five minutes unless a write clears them.
const LIST_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// ```text
/// GET    /        -> list (cached)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router(state: &AppState) -> Router<AppState> {
    let cached = CachedRoute {
        cache: state.cache.clone(),
        options: CacheOptions::with_ttl(LIST_CACHE_TTL),
    };

    Router::new()
        .route(
            "/",
            get(movie::list)
                .route_layer(middleware::from_fn_with_state(cached, cache_response))
                .post(movie::create),
        )
        .route(
            "/{id}",
            get(movie::get_by_id)
                .patch(movie::update)
                .put(movie::update)
                .delete(movie::delete),
        )
}
