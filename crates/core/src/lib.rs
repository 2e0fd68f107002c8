//! Domain layer of the movie catalog.
//!
//! Holds everything that does not touch the network or the database:
//! entities, request/response DTOs and their validation rules, mappers,
//! pagination math, repository ports, and the use cases that orchestrate
//! them.

pub mod dto;
pub mod entities;
pub mod error;
pub mod mappers;
pub mod messages;
pub mod pagination;
pub mod repositories;
pub mod services;
pub mod types;
pub mod use_cases;
pub mod validation;
