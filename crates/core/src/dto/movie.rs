use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::date_input;
use crate::dto::director::DirectorDto;
use crate::entities::MovieSortField;
use crate::pagination::{Pagination, SortDirection};
use crate::types::{EntityId, Timestamp};
use crate::validation::validate_entity_id;

/// Body of `POST /movies`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieDto {
    #[validate(
        required(message = "Movie title is required"),
        length(min = 1, message = "Movie title is required")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "Movie description is required"),
        length(min = 1, message = "Movie description is required")
    )]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "date_input::deserialize_optional")]
    #[validate(required(message = "Movie release date is required"))]
    pub release_date: Option<Timestamp>,

    #[validate(
        required(message = "Movie genre is required"),
        length(min = 1, message = "Movie genre is required")
    )]
    pub genre: Option<String>,

    /// Defaults to 0 when omitted.
    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    pub rating: Option<f64>,

    #[validate(
        required(message = "IMDB ID is required"),
        length(min = 1, message = "IMDB ID is required")
    )]
    pub imdb_id: Option<String>,

    /// Director id.
    #[validate(
        required(message = "Director is required for the movie"),
        custom(function = "validate_entity_id")
    )]
    pub director: Option<String>,
}

/// Body of `PATCH /movies/:id` and `PUT /movies/:id`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieDto {
    #[validate(length(min = 1, message = "Movie title is required"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Movie description is required"))]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "date_input::deserialize_optional")]
    pub release_date: Option<Timestamp>,

    #[validate(length(min = 1, message = "Movie genre is required"))]
    pub genre: Option<String>,

    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    pub rating: Option<f64>,

    #[validate(length(min = 1, message = "IMDB ID is required"))]
    pub imdb_id: Option<String>,

    #[validate(custom(function = "validate_entity_id"))]
    pub director: Option<String>,
}

/// Query string of `GET /movies`.
///
/// Numbers are signed so that `page=-1` reaches validation and produces an
/// itemised violation instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieQueryDto {
    #[validate(range(min = 1, message = "You should provide a positive integer"))]
    pub page: Option<i64>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,

    pub sort_by: Option<MovieSortField>,
    pub sort_dir: Option<SortDirection>,

    pub title: Option<String>,
    pub genre: Option<String>,

    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    pub rating: Option<f64>,

    #[serde(default, deserialize_with = "date_input::deserialize_optional")]
    pub release_date: Option<Timestamp>,

    #[validate(custom(function = "validate_entity_id"))]
    pub director: Option<String>,
}

/// Public view of a movie, with its director nested.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub release_date: Timestamp,
    pub genre: String,
    pub rating: f64,
    pub imdb_id: String,
    pub director: DirectorDto,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One page of movies plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieListResponse {
    pub data: Vec<MovieDto>,
    pub pagination: Pagination,
}
