//! Escaping of HTML angle brackets in client input.
//!
//! Every string inside a JSON body (at any depth) and every query value has
//! `<` replaced by `&lt;` and `>` by `&gt;` before routing.

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::uri::PathAndQuery;
use axum::http::{header, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::error::AppError;

/// Largest request body accepted for sanitising.
pub const MAX_BODY_BYTES: usize = 15 * 1024 * 1024;

pub async fn sanitize(request: Request, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();

    if let Some(uri) = sanitize_uri(&parts.uri) {
        parts.uri = uri;
    }

    let is_json = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));

    if !is_json {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                axum::Json(serde_json::json!({
                    "statusCode": StatusCode::PAYLOAD_TOO_LARGE.as_u16(),
                    "code": "PAYLOAD_TOO_LARGE",
                    "error": "Request body is too large",
                })),
            )
                .into_response();
        }
    };

    // Malformed JSON is passed through untouched so the extractor reports it.
    let body = match serde_json::from_slice::<Value>(&bytes) {
        Ok(mut value) => {
            if escape_value(&mut value) {
                match serde_json::to_vec(&value) {
                    Ok(rewritten) => {
                        parts.headers.remove(header::CONTENT_LENGTH);
                        Body::from(rewritten)
                    }
                    Err(err) => return AppError::InternalError(err.to_string()).into_response(),
                }
            } else {
                Body::from(bytes)
            }
        }
        Err(_) => Body::from(bytes),
    };

    next.run(Request::from_parts(parts, body)).await
}

/// Escape angle brackets in `raw`.
pub fn escape_html(raw: &str) -> String {
    raw.replace('<', "&lt;").replace('>', "&gt;")
}

fn needs_escape(raw: &str) -> bool {
    raw.contains(['<', '>'])
}

/// Escape every string in `value` in place. Returns whether anything changed.
fn escape_value(value: &mut Value) -> bool {
    match value {
        Value::String(s) if needs_escape(s) => {
            *s = escape_html(s);
            true
        }
        Value::Array(items) => items.iter_mut().fold(false, |changed, item| escape_value(item) | changed),
        Value::Object(map) => map.values_mut().fold(false, |changed, item| escape_value(item) | changed),
        _ => false,
    }
}

/// Rebuild `uri` with escaped query values, or `None` when nothing changes.
fn sanitize_uri(uri: &Uri) -> Option<Uri> {
    let query = uri.query()?;
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).ok()?;
    if !pairs.iter().any(|(_, v)| needs_escape(v)) {
        return None;
    }

    let escaped: Vec<(String, String)> = pairs.into_iter().map(|(k, v)| (k, escape_html(&v))).collect();
    let encoded = serde_urlencoded::to_string(&escaped).ok()?;
    let path_and_query = PathAndQuery::try_from(format!("{}?{encoded}", uri.path())).ok()?;

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query);
    Uri::from_parts(parts).ok()
}
