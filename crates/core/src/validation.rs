//! Validation pipeline shared by every request DTO.
//!
//! DTOs declare their constraints with `validator` derives; [`validate_input`]
//! runs them and flattens the result into a list of [`FieldViolation`]s that
//! the HTTP layer can serialise as-is.

use std::borrow::Cow;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::messages;
use crate::types::EntityId;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field name as it appears on the wire (camelCase).
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Run the declared constraints of `input`.
///
/// Returns the value untouched when it is valid, or every violation found,
/// sorted by field so responses are deterministic.
pub fn validate_input<T: Validate>(input: T) -> Result<T, Vec<FieldViolation>> {
    match input.validate() {
        Ok(()) => Ok(input),
        Err(errors) => Err(flatten_errors(&errors)),
    }
}

/// Flatten `validator`'s nested error map into wire-level violations.
pub fn flatten_errors(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = to_camel_case(&field.to_string());
            field_errors.iter().map(move |err| FieldViolation {
                field: field.clone(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", err.code)),
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    violations
}

/// Custom `validator` rule: the value must be a well-formed entity id.
pub fn validate_entity_id(value: &str) -> Result<(), ValidationError> {
    parse_entity_id(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("entity_id").with_message(Cow::Borrowed(messages::INVALID_ID)))
}

/// Parse an opaque id received from a client.
pub fn parse_entity_id(value: &str) -> Option<EntityId> {
    EntityId::parse_str(value.trim()).ok()
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
