use std::sync::Arc;

use crate::dto::MovieListResponse;
use crate::error::RepoError;
use crate::mappers::movie::movie_to_dto;
use crate::pagination::{PageRequest, Pagination};
use crate::repositories::{FindAllMovieOptions, MovieFilters, MovieRepository, SortSpec};

/// Parameters of a movie listing.
///
/// `Default` yields page 1, 10 per page, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListMoviesQuery {
    pub page: PageRequest,
    pub sort: SortSpec,
    pub filters: MovieFilters,
}

/// Lists one page of movies with their directors and the total match count.
pub struct ListMovies {
    movies: Arc<dyn MovieRepository>,
}

impl ListMovies {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    pub async fn execute(&self, query: ListMoviesQuery) -> Result<MovieListResponse, RepoError> {
        let options = FindAllMovieOptions {
            filters: query.filters,
            page: query.page,
            sort: query.sort,
            populate_director: true,
        };

        let movies = self.movies.find_all(&options).await.inspect_err(|err| {
            tracing::error!(page = options.page.page, limit = options.page.limit, error = %err, "list movies failed");
        })?;
        let total = self.movies.count(&options.filters).await.inspect_err(|err| {
            tracing::error!(error = %err, "count movies failed");
        })?;

        Ok(MovieListResponse {
            data: movies.iter().map(movie_to_dto).collect(),
            pagination: Pagination::new(total, options.page),
        })
    }
}
