use std::sync::Arc;

use crate::dto::MovieDto;
use crate::error::RepoError;
use crate::mappers::movie::movie_to_dto;
use crate::repositories::MovieRepository;
use crate::types::EntityId;

pub struct GetMovie {
    movies: Arc<dyn MovieRepository>,
}

impl GetMovie {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    pub async fn execute(&self, id: EntityId) -> Result<Option<MovieDto>, RepoError> {
        let movie = self.movies.find_by_id(id).await.inspect_err(|err| {
            tracing::error!(movie_id = %id, error = %err, "get movie failed");
        })?;
        Ok(movie.as_ref().map(movie_to_dto))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockMovieRepository;
    use crate::use_cases::fixtures;

    #[tokio::test]
    async fn maps_found_movie() {
        let id = uuid::Uuid::now_v7();
        let mut movies = MockMovieRepository::new();
        movies
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::movie(id, uuid::Uuid::now_v7()))));

        let dto = GetMovie::new(Arc::new(movies)).execute(id).await.unwrap();
        assert_eq!(dto.map(|d| d.id), Some(id));
    }

    #[tokio::test]
    async fn absence_is_not_an_error() {
        let mut movies = MockMovieRepository::new();
        movies.expect_find_by_id().returning(|_| Ok(None));

        let dto = GetMovie::new(Arc::new(movies))
            .execute(uuid::Uuid::now_v7())
            .await
            .unwrap();
        assert!(dto.is_none());
    }

    #[tokio::test]
    async fn backend_failure_is_propagated() {
        let mut movies = MockMovieRepository::new();
        movies
            .expect_find_by_id()
            .returning(|_| Err(RepoError::Backend("connection reset".into())));

        let result = GetMovie::new(Arc::new(movies)).execute(uuid::Uuid::now_v7()).await;
        assert!(matches!(result, Err(RepoError::Backend(_))));
    }
}
