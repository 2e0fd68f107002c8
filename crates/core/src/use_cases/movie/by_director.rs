use std::sync::Arc;

use crate::dto::MovieDto;
use crate::error::RepoError;
use crate::mappers::movie::movie_to_dto;
use crate::repositories::MovieRepository;
use crate::services::DirectorCheck;
use crate::types::EntityId;

/// All movies of one director; `None` when the director does not exist.
pub struct ListMoviesByDirector {
    movies: Arc<dyn MovieRepository>,
    directors: DirectorCheck,
}

impl ListMoviesByDirector {
    pub fn new(movies: Arc<dyn MovieRepository>, directors: DirectorCheck) -> Self {
        Self { movies, directors }
    }

    pub async fn execute(&self, director_id: EntityId) -> Result<Option<Vec<MovieDto>>, RepoError> {
        let exists = self.directors.exists(director_id).await.inspect_err(|err| {
            tracing::error!(director_id = %director_id, error = %err, "list movies by director: director lookup failed");
        })?;
        if !exists {
            return Ok(None);
        }
        let movies = self.movies.find_by_director(director_id).await.inspect_err(|err| {
            tracing::error!(director_id = %director_id, error = %err, "list movies by director failed");
        })?;
        Ok(Some(movies.iter().map(movie_to_dto).collect()))
    }
}
