//! Domain entities.
//!
//! These are the shapes the use cases and repositories exchange. They carry
//! server-assigned fields (`id`, timestamps) and are never serialised to
//! clients directly; see [`crate::dto`] for the API shapes.

pub mod director;
pub mod movie;

pub use director::{Director, NewDirector};
pub use movie::{DirectorRef, Movie, MovieChanges, MovieSortField, NewMovie};
