//! Persistence ports.
//!
//! Use cases depend on these traits only; `catalog-db` provides the
//! PostgreSQL implementations and the API tests provide in-memory ones.
//!
//! Read operations are expected to degrade (log and return `None`, empty or
//! zero) on transient backend failures; writes must report them.

use async_trait::async_trait;

use crate::entities::{Director, Movie, MovieChanges, MovieSortField, NewDirector, NewMovie};
use crate::error::RepoError;
use crate::pagination::{PageRequest, SortDirection};
use crate::types::{EntityId, Timestamp};

/// Filters for movie listings. `None` means "do not filter on this field".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilters {
    /// Case-insensitive substring match.
    pub title: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
    pub release_date: Option<Timestamp>,
    pub director: Option<EntityId>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub field: MovieSortField,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindAllMovieOptions {
    pub filters: MovieFilters,
    pub page: PageRequest,
    pub sort: SortSpec,
    /// Resolve the full director instead of returning only its id.
    pub populate_director: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Movie>, RepoError>;

    async fn find_all(&self, options: &FindAllMovieOptions) -> Result<Vec<Movie>, RepoError>;

    /// Number of movies matching `filters`, ignoring pagination.
    async fn count(&self, filters: &MovieFilters) -> Result<u64, RepoError>;

    async fn find_by_director(&self, director_id: EntityId) -> Result<Vec<Movie>, RepoError>;

    async fn create(&self, movie: &NewMovie) -> Result<Movie, RepoError>;

    /// Apply `changes`; `None` when no movie has this id.
    async fn update(&self, id: EntityId, changes: &MovieChanges) -> Result<Option<Movie>, RepoError>;

    /// `true` when a row was removed.
    async fn delete(&self, id: EntityId) -> Result<bool, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectorRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Director>, RepoError>;

    async fn create(&self, director: &NewDirector) -> Result<Director, RepoError>;

    async fn delete(&self, id: EntityId) -> Result<bool, RepoError>;
}
