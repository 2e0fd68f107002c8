use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use catalog_core::messages;
use serde_json::json;

use crate::rate_limit::{Decision, RateLimiter};

const LIMIT_HEADER: HeaderName = HeaderName::from_static("ratelimit-limit");
const REMAINING_HEADER: HeaderName = HeaderName::from_static("ratelimit-remaining");
const RESET_HEADER: HeaderName = HeaderName::from_static("ratelimit-reset");

/// Reject requests over their tier's ceiling with 429.
pub async fn rate_limit(State(limiter): State<RateLimiter>, request: Request, next: Next) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    match limiter.check(&client, request.method(), request.uri().path()).await {
        Decision::Skipped => next.run(request).await,
        Decision::Allowed {
            limit,
            remaining,
            reset_in,
        } => {
            let mut response = next.run(request).await;
            set_headers(response.headers_mut(), limit, remaining, reset_in);
            response
        }
        Decision::Limited { limit, reset_in } => {
            let body = json!({
                "error": {
                    "statusCode": StatusCode::TOO_MANY_REQUESTS.as_u16(),
                    "name": "TooManyRequestsError",
                    "message": messages::TOO_MANY_REQUESTS,
                }
            });
            let mut response = (StatusCode::TOO_MANY_REQUESTS, axum::Json(body)).into_response();
            set_headers(response.headers_mut(), limit, 0, reset_in);
            response
                .headers_mut()
                .insert(axum::http::header::RETRY_AFTER, HeaderValue::from(seconds(reset_in)));
            response
        }
    }
}

fn set_headers(headers: &mut HeaderMap, limit: u64, remaining: u64, reset_in: Duration) {
    headers.insert(LIMIT_HEADER, HeaderValue::from(limit));
    headers.insert(REMAINING_HEADER, HeaderValue::from(remaining));
    headers.insert(RESET_HEADER, HeaderValue::from(seconds(reset_in)));
}

/// Whole seconds, rounded up.
fn seconds(duration: Duration) -> u64 {
    duration.as_millis().div_ceil(1000).try_into().unwrap_or(u64::MAX)
}
