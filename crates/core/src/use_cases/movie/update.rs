use std::sync::Arc;

use crate::entities::MovieChanges;
use crate::error::RepoError;
use crate::mappers::movie::movie_to_dto;
use crate::repositories::MovieRepository;
use crate::services::DirectorCheck;
use crate::types::EntityId;
use crate::use_cases::movie::MovieWriteOutcome;

/// Applies a partial update. A new director reference is checked first.
pub struct UpdateMovie {
    movies: Arc<dyn MovieRepository>,
    directors: DirectorCheck,
}

impl UpdateMovie {
    pub fn new(movies: Arc<dyn MovieRepository>, directors: DirectorCheck) -> Self {
        Self { movies, directors }
    }

    pub async fn execute(&self, id: EntityId, changes: MovieChanges) -> Result<MovieWriteOutcome, RepoError> {
        if let Some(director_id) = changes.director_id {
            let exists = self.directors.exists(director_id).await.inspect_err(|err| {
                tracing::error!(movie_id = %id, director_id = %director_id, error = %err, "update movie: director lookup failed");
            })?;
            if !exists {
                return Ok(MovieWriteOutcome::DirectorNotFound);
            }
        }

        let updated = self.movies.update(id, &changes).await.inspect_err(|err| {
            tracing::error!(movie_id = %id, error = %err, "update movie failed");
        })?;

        Ok(match updated {
            Some(movie) => MovieWriteOutcome::Saved(movie_to_dto(&movie)),
            None => MovieWriteOutcome::MovieNotFound,
        })
    }
}
