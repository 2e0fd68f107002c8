use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::{CoreError, RepoError};
use catalog_core::messages;
use catalog_core::validation::FieldViolation;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`RepoError`] and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses:
/// `{ "statusCode", "code", "error" }`, plus `details` for validation errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence failure reported by a repository.
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// Request input failed field validation.
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An extractor rejection whose status is not a plain 400, such as
    /// 413 or 415.
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    /// No route or resource matched.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity = %entity, id = %id, "Entity not found");
                    (StatusCode::NOT_FOUND, "NOT_FOUND", format!("{entity} not found!"))
                }
                CoreError::MissingReference { entity, id } => {
                    tracing::debug!(entity = %entity, id = %id, "Referenced entity not found");
                    (
                        StatusCode::BAD_REQUEST,
                        "REFERENCE_NOT_FOUND",
                        format!("{entity} not found!"),
                    )
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Repository errors ---
            AppError::Repo(repo) => match repo {
                RepoError::Conflict { message, .. } => (StatusCode::CONFLICT, "CONFLICT", message.clone()),
                RepoError::Backend(msg) => {
                    tracing::error!(error = %msg, "Repository error");
                    internal()
                }
            },

            // --- HTTP-specific errors ---
            AppError::Validation(violations) => {
                let body = json!({
                    "statusCode": StatusCode::BAD_REQUEST.as_u16(),
                    "code": "VALIDATION_ERROR",
                    "error": "Validation failed",
                    "details": violations,
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Rejected { status, message } => (*status, rejection_code(*status), message.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "statusCode": status.as_u16(),
            "code": code,
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn rejection_code(status: StatusCode) -> &'static str {
    match status {
        StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
        _ => "BAD_REQUEST",
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        messages::SOMETHING_WENT_WRONG.to_string(),
    )
}
