//! Movie catalog HTTP server library.
//!
//! Exposes configuration, state wiring, the router and its middleware so the
//! binary entrypoint and the integration tests build the exact same app.

pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod rate_limit;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
