//! PostgreSQL implementations of the catalog repository ports.

mod director_repo;
mod movie_repo;

pub use director_repo::PgDirectorRepository;
pub use movie_repo::PgMovieRepository;
