//! Row shapes read back from PostgreSQL and their conversion into entities.

pub mod director;
pub mod movie;

pub use director::DirectorRow;
pub use movie::{MovieRow, MovieWithDirectorRow};
