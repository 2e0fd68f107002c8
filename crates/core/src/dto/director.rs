use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::date_input;
use crate::types::{EntityId, Timestamp};

/// Body of `POST /directors`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDirectorDto {
    #[validate(
        required(message = "Director first name is required"),
        length(min = 1, message = "Director first name is required")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "Director second name is required"),
        length(min = 1, message = "Director second name is required")
    )]
    pub second_name: Option<String>,

    #[serde(default, deserialize_with = "date_input::deserialize_optional")]
    #[validate(required(message = "Director birth date is required"))]
    pub birth_date: Option<Timestamp>,

    #[validate(
        required(message = "Director bio is required"),
        length(min = 1, message = "Director bio is required")
    )]
    pub bio: Option<String>,
}

/// Public view of a director.
///
/// Only identity and name are exposed; `bio`, `birthDate` and timestamps stay
/// internal. The name fields are absent when the director reference was not
/// populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorDto {
    pub id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;
    use crate::validation::{validate_input, FieldViolation};

    #[test]
    fn empty_body_reports_every_required_field() {
        let dto: CreateDirectorDto = serde_json::from_str("{}").unwrap();
        let violations = validate_input(dto).unwrap_err();
        assert_eq!(
            violations,
            vec![
                FieldViolation::new("bio", messages::DIRECTOR_BIO_REQUIRED),
                FieldViolation::new("birthDate", messages::DIRECTOR_BIRTH_DATE_REQUIRED),
                FieldViolation::new("firstName", messages::DIRECTOR_FIRST_NAME_REQUIRED),
                FieldViolation::new("secondName", messages::DIRECTOR_SECOND_NAME_REQUIRED),
            ]
        );
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let dto: CreateDirectorDto = serde_json::from_value(serde_json::json!({
            "firstName": "Steven",
            "secondName": "Spielberg",
            "birthDate": "1946-12-18",
            "bio": "American filmmaker",
            "isAdmin": true
        }))
        .unwrap();
        assert!(validate_input(dto).is_ok());
    }

    #[test]
    fn bad_birth_date_fails_to_parse() {
        let err = serde_json::from_value::<CreateDirectorDto>(serde_json::json!({
            "birthDate": "not a date"
        }))
        .unwrap_err();
        assert!(err.to_string().contains(messages::PROVIDE_VALID_DATE));
    }

    #[test]
    fn director_dto_hides_unpopulated_names() {
        let id = uuid::Uuid::nil();
        let json = serde_json::to_value(DirectorDto {
            id,
            first_name: None,
            second_name: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "id": id }));
    }
}
