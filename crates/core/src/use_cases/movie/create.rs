use std::sync::Arc;

use crate::entities::NewMovie;
use crate::error::RepoError;
use crate::mappers::movie::movie_to_dto;
use crate::repositories::MovieRepository;
use crate::services::DirectorCheck;
use crate::use_cases::movie::MovieWriteOutcome;

/// Creates a movie once its director is known to exist.
pub struct CreateMovie {
    movies: Arc<dyn MovieRepository>,
    directors: DirectorCheck,
}

impl CreateMovie {
    pub fn new(movies: Arc<dyn MovieRepository>, directors: DirectorCheck) -> Self {
        Self { movies, directors }
    }

    pub async fn execute(&self, movie: NewMovie) -> Result<MovieWriteOutcome, RepoError> {
        let director_id = movie.director_id;
        let exists = self.directors.exists(director_id).await.inspect_err(|err| {
            tracing::error!(director_id = %director_id, error = %err, "create movie: director lookup failed");
        })?;
        if !exists {
            tracing::debug!(director_id = %director_id, "create movie: director not found");
            return Ok(MovieWriteOutcome::DirectorNotFound);
        }

        let created = self.movies.create(&movie).await.inspect_err(|err| {
            tracing::error!(imdb_id = %movie.imdb_id, error = %err, "create movie failed");
        })?;
        tracing::info!(movie_id = %created.id, "movie created");
        Ok(MovieWriteOutcome::Saved(movie_to_dto(&created)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockDirectorRepository, MockMovieRepository};
    use crate::use_cases::fixtures;
    use assert_matches::assert_matches;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn creates_when_director_exists() {
        let director_id = uuid::Uuid::now_v7();
        let movie_id = uuid::Uuid::now_v7();

        let mut directors = MockDirectorRepository::new();
        directors
            .expect_find_by_id()
            .with(eq(director_id))
            .returning(|id| Ok(Some(fixtures::director(id))));

        let mut movies = MockMovieRepository::new();
        movies
            .expect_create()
            .times(1)
            .returning(move |m| Ok(fixtures::movie(movie_id, m.director_id)));

        let use_case = CreateMovie::new(Arc::new(movies), DirectorCheck::new(Arc::new(directors)));
        let outcome = use_case.execute(fixtures::new_movie(director_id)).await.unwrap();

        assert_matches!(outcome, MovieWriteOutcome::Saved(dto) => {
            assert_eq!(dto.id, movie_id);
            assert_eq!(dto.director.id, director_id);
            assert_eq!(dto.director.first_name.as_deref(), Some("Christopher"));
        });
    }

    #[tokio::test]
    async fn refuses_unknown_director_without_writing() {
        let mut directors = MockDirectorRepository::new();
        directors.expect_find_by_id().returning(|_| Ok(None));

        let mut movies = MockMovieRepository::new();
        movies.expect_create().never();

        let use_case = CreateMovie::new(Arc::new(movies), DirectorCheck::new(Arc::new(directors)));
        let outcome = use_case
            .execute(fixtures::new_movie(uuid::Uuid::now_v7()))
            .await
            .unwrap();

        assert_eq!(outcome, MovieWriteOutcome::DirectorNotFound);
    }

    #[tokio::test]
    async fn propagates_write_failures() {
        let mut directors = MockDirectorRepository::new();
        directors
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::director(id))));

        let mut movies = MockMovieRepository::new();
        movies.expect_create().returning(|_| {
            Err(RepoError::Conflict {
                constraint: "uq_movies_imdb_id".into(),
                message: "duplicate".into(),
            })
        });

        let use_case = CreateMovie::new(Arc::new(movies), DirectorCheck::new(Arc::new(directors)));
        let result = use_case.execute(fixtures::new_movie(uuid::Uuid::now_v7())).await;

        assert_matches!(result, Err(RepoError::Conflict { constraint, .. }) if constraint == "uq_movies_imdb_id");
    }
}
