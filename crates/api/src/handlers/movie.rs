//! Handlers for the `/movies` resource.
//!
//! Writes report a missing director as 400 and a missing movie as 404.
//! Every successful write drops cached list responses.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::dto::{CreateMovieDto, MovieDto, MovieListResponse, MovieQueryDto, UpdateMovieDto};
use catalog_core::error::CoreError;
use catalog_core::mappers::movie::{create_dto_to_new_movie, query_dto_to_list_query, update_dto_to_changes};
use catalog_core::types::EntityId;
use catalog_core::use_cases::movie::MovieWriteOutcome;

use crate::error::{AppError, AppResult};
use crate::extract::{EntityIdPath, ValidatedJson, ValidatedQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// Translate a write outcome into the saved movie or an HTTP error.
fn saved_or_error(outcome: MovieWriteOutcome, movie_id: Option<EntityId>, director: Option<EntityId>) -> AppResult<MovieDto> {
    match outcome {
        MovieWriteOutcome::Saved(movie) => Ok(movie),
        MovieWriteOutcome::MovieNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id.unwrap_or_default(),
        })),
        MovieWriteOutcome::DirectorNotFound => Err(AppError::Core(CoreError::MissingReference {
            entity: "Director",
            id: director.unwrap_or_default(),
        })),
    }
}

fn movie_not_found(id: EntityId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// GET /api/v1/movies
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<MovieQueryDto>,
) -> AppResult<Json<MovieListResponse>> {
    let query = query_dto_to_list_query(query)?;
    let movies = state.movies.list.execute(query).await?;
    Ok(Json(movies))
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMovieDto>,
) -> AppResult<(StatusCode, Json<DataResponse<MovieDto>>)> {
    let movie = create_dto_to_new_movie(input)?;
    let director = movie.director_id;

    let outcome = state.movies.create.execute(movie).await?;
    let movie = saved_or_error(outcome, None, Some(director))?;

    state.cache.invalidate().await;
    tracing::info!(movie_id = %movie.id, "Movie created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: movie })))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityIdPath(id): EntityIdPath,
) -> AppResult<Json<DataResponse<MovieDto>>> {
    let movie = state
        .movies
        .get
        .execute(id)
        .await?
        .ok_or_else(|| movie_not_found(id))?;
    Ok(Json(DataResponse { data: movie }))
}

/// PATCH /api/v1/movies/{id}
///
/// `PUT` is routed here too; both apply a partial update.
pub async fn update(
    State(state): State<AppState>,
    EntityIdPath(id): EntityIdPath,
    ValidatedJson(input): ValidatedJson<UpdateMovieDto>,
) -> AppResult<Json<DataResponse<MovieDto>>> {
    let changes = update_dto_to_changes(input)?;
    let director = changes.director_id;

    let outcome = state.movies.update.execute(id, changes).await?;
    let movie = saved_or_error(outcome, Some(id), director)?;

    state.cache.invalidate().await;
    tracing::info!(movie_id = %id, "Movie updated");
    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(State(state): State<AppState>, EntityIdPath(id): EntityIdPath) -> AppResult<StatusCode> {
    if !state.movies.delete.execute(id).await? {
        return Err(movie_not_found(id));
    }

    state.cache.invalidate().await;
    tracing::info!(movie_id = %id, "Movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
