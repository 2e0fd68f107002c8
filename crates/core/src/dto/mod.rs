//! API-boundary data shapes.
//!
//! Request DTOs are deserialised from client input and validated with
//! `validator`; every required field is an `Option` tagged `required` so a
//! missing field shows up as a field violation instead of a parse error.
//! Unknown fields are silently dropped. Response DTOs decide which entity
//! fields are exposed.

pub mod date_input;
pub mod director;
pub mod movie;

pub use director::{CreateDirectorDto, DirectorDto};
pub use movie::{CreateMovieDto, MovieDto, MovieListResponse, MovieQueryDto, UpdateMovieDto};
