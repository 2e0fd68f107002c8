//! Request extractors that run the validation pipeline.
//!
//! Deserialisation drops unknown fields and coerces query strings; the
//! resulting value is then checked against its `validator` rules. Handlers
//! only ever see input that passed both steps.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::messages;
use catalog_core::types::EntityId;
use catalog_core::validation::{parse_entity_id, validate_input, FieldViolation};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Malformed input becomes a 400; any other rejection keeps its status.
fn rejected(status: StatusCode, message: String) -> AppError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => AppError::BadRequest(message),
        status => AppError::Rejected { status, message },
    }
}

/// JSON body, deserialised and validated.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;
        validate_input(value).map(ValidatedJson).map_err(AppError::Validation)
    }
}

/// Query string, deserialised and validated.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;
        validate_input(value).map(ValidatedQuery).map_err(AppError::Validation)
    }
}

/// The `:id` path segment, which must be a well-formed entity id.
#[derive(Debug, Clone, Copy)]
pub struct EntityIdPath(pub EntityId);

impl<S> FromRequestParts<S> for EntityIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        parse_entity_id(&raw)
            .map(EntityIdPath)
            .ok_or_else(|| AppError::Validation(vec![FieldViolation::new("id", messages::INVALID_ID)]))
    }
}
