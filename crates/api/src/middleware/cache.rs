use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body, HttpBody};
use axum::extract::{OriginalUri, Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::cache::ResponseCache;
use crate::error::AppError;

/// Largest response body that will be buffered for caching.
const MAX_CACHED_BODY: usize = 4 * 1024 * 1024;

pub const CACHE_STATUS_HEADER: &str = "x-cache";

/// Derives a cache key from the incoming request.
pub type KeyGenerator = Arc<dyn Fn(&Request) -> String + Send + Sync>;

/// Per-route caching policy.
#[derive(Clone, Default)]
pub struct CacheOptions {
    /// Defaults to the original request path and query.
    pub key: Option<KeyGenerator>,
    /// Defaults to the cache-wide TTL.
    pub ttl: Option<Duration>,
}

impl CacheOptions {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            key: None,
            ttl: Some(ttl),
        }
    }

    fn key(&self, request: &Request) -> String {
        match &self.key {
            Some(generate) => generate(request),
            None => {
                // Nested routers see a stripped path; key on the full one.
                let uri = request
                    .extensions()
                    .get::<OriginalUri>()
                    .map(|OriginalUri(uri)| uri)
                    .unwrap_or_else(|| request.uri());
                uri.path_and_query()
                    .map(|pq| pq.as_str().to_string())
                    .unwrap_or_else(|| uri.path().to_string())
            }
        }
    }
}

/// State for [`cache_response`].
#[derive(Clone)]
pub struct CachedRoute {
    pub cache: ResponseCache,
    pub options: CacheOptions,
}

/// Serve `GET` responses from the cache, storing successful misses.
///
/// Cache failures never fail the request.
pub async fn cache_response(State(route): State<CachedRoute>, request: Request, next: Next) -> Response {
    if request.method() != Method::GET || !route.cache.is_enabled() {
        return next.run(request).await;
    }

    let key = route.cache.key_for(&route.options.key(&request));

    match route.cache.get(&key).await {
        Ok(Some(body)) => {
            tracing::debug!(key = %key, "Cache hit");
            return cached_response(body);
        }
        Ok(None) => {}
        Err(err) => tracing::warn!(key = %key, error = %err, "Cache read failed"),
    }

    let response = next.run(request).await;
    if !response.status().is_success() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    if !fits_cache(body.size_hint().upper()) {
        tracing::debug!(key = %key, "Skipping cache for oversized body");
        return Response::from_parts(parts, body);
    }
    let bytes = match to_bytes(body, MAX_CACHED_BODY).await {
        Ok(bytes) => bytes,
        Err(err) => {
            return AppError::InternalError(format!("failed to buffer response body: {err}")).into_response();
        }
    };

    match std::str::from_utf8(&bytes) {
        Ok(text) => {
            if let Err(err) = route.cache.set(&key, text.to_owned(), route.options.ttl).await {
                tracing::warn!(key = %key, error = %err, "Cache write failed");
            }
        }
        Err(_) => tracing::debug!(key = %key, "Skipping cache for non UTF-8 body"),
    }

    parts
        .headers
        .insert(CACHE_STATUS_HEADER, HeaderValue::from_static("MISS"));
    Response::from_parts(parts, Body::from(bytes))
}

fn fits_cache(upper_bound: Option<u64>) -> bool {
    upper_bound.is_some_and(|len| len <= MAX_CACHED_BODY as u64)
}

fn cached_response(body: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (
                header::HeaderName::from_static(CACHE_STATUS_HEADER),
                HeaderValue::from_static("HIT"),
            ),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_up_to_the_limit_fit() {
        assert!(fits_cache(Some(0)));
        assert!(fits_cache(Some(MAX_CACHED_BODY as u64)));
    }

    #[test]
    fn oversized_or_unbounded_bodies_do_not_fit() {
        assert!(!fits_cache(Some(MAX_CACHED_BODY as u64 + 1)));
        assert!(!fits_cache(None));
    }
}
