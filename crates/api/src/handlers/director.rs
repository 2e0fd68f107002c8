use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::dto::{CreateDirectorDto, DirectorDto, MovieDto};
use catalog_core::error::CoreError;
use catalog_core::mappers::director::create_dto_to_new_director;
use catalog_core::types::EntityId;

use crate::error::{AppError, AppResult};
use crate::extract::{EntityIdPath, ValidatedJson};
use crate::response::DataResponse;
use crate::state::AppState;

fn director_not_found(id: EntityId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Director", id })
}

/// POST /api/v1/directors
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDirectorDto>,
) -> AppResult<(StatusCode, Json<DataResponse<DirectorDto>>)> {
    let director = create_dto_to_new_director(input)?;
    let director = state.directors.create.execute(director).await?;

    tracing::info!(director_id = %director.id, "Director created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: director })))
}

/// GET /api/v1/directors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityIdPath(id): EntityIdPath,
) -> AppResult<Json<DataResponse<DirectorDto>>> {
    let director = state
        .directors
        .get
        .execute(id)
        .await?
        .ok_or_else(|| director_not_found(id))?;
    Ok(Json(DataResponse { data: director }))
}

/// GET /api/v1/directors/{id}/movies
pub async fn movies(
    State(state): State<AppState>,
    EntityIdPath(id): EntityIdPath,
) -> AppResult<Json<DataResponse<Vec<MovieDto>>>> {
    let movies = state
        .movies
        .by_director
        .execute(id)
        .await?
        .ok_or_else(|| director_not_found(id))?;
    Ok(Json(DataResponse { data: movies }))
}

/// DELETE /api/v1/directors/{id}
///
/// Fails with 409 while movies still reference the director.
pub async fn delete(State(state): State<AppState>, EntityIdPath(id): EntityIdPath) -> AppResult<StatusCode> {
    if !state.directors.delete.execute(id).await? {
        return Err(director_not_found(id));
    }

    tracing::info!(director_id = %id, "Director deleted");
    Ok(StatusCode::NO_CONTENT)
}
