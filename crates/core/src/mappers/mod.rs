//! Pure conversions between request DTOs, domain entities and response DTOs.
//!
//! Request mappers assume the DTO already passed validation but still return
//! `Result`, so a DTO built by hand (tests, other callers) cannot smuggle a
//! missing field past them.

pub mod director;
pub mod movie;

use crate::error::CoreError;

pub(crate) fn required<T>(value: Option<T>, message: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(message.to_string()))
}
