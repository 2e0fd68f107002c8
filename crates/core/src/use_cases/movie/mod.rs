//! Movie use cases.

mod by_director;
mod create;
mod delete;
mod get;
mod list;
mod update;

use std::sync::Arc;

pub use by_director::ListMoviesByDirector;
pub use create::CreateMovie;
pub use delete::DeleteMovie;
pub use get::GetMovie;
pub use list::{ListMovies, ListMoviesQuery};
pub use update::UpdateMovie;

use crate::dto::MovieDto;
use crate::repositories::{DirectorRepository, MovieRepository};
use crate::services::DirectorCheck;

/// Result of a movie write that may be refused for lack of a target.
///
/// `MovieNotFound` and `DirectorNotFound` are distinct so callers can
/// report 404 and 400 respectively.
#[derive(Debug, Clone, PartialEq)]
pub enum MovieWriteOutcome {
    Saved(MovieDto),
    MovieNotFound,
    DirectorNotFound,
}

/// Every movie use case, wired against the same repositories.
#[derive(Clone)]
pub struct MovieUseCases {
    pub create: Arc<CreateMovie>,
    pub get: Arc<GetMovie>,
    pub list: Arc<ListMovies>,
    pub update: Arc<UpdateMovie>,
    pub delete: Arc<DeleteMovie>,
    pub by_director: Arc<ListMoviesByDirector>,
}

impl MovieUseCases {
    pub fn new(movies: Arc<dyn MovieRepository>, directors: Arc<dyn DirectorRepository>) -> Self {
        let check = DirectorCheck::new(directors);
        Self {
            create: Arc::new(CreateMovie::new(movies.clone(), check.clone())),
            get: Arc::new(GetMovie::new(movies.clone())),
            list: Arc::new(ListMovies::new(movies.clone())),
            update: Arc::new(UpdateMovie::new(movies.clone(), check.clone())),
            delete: Arc::new(DeleteMovie::new(movies.clone())),
            by_director: Arc::new(ListMoviesByDirector::new(movies, check)),
        }
    }
}
