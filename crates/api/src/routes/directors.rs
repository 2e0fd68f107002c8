//! Route definitions for `/directors`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::director;
use crate::state::AppState;

/// ```text
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// DELETE /{id}           -> delete
/// GET    /{id}/movies    -> movies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(director::create))
        .route("/{id}", get(director::get_by_id).delete(director::delete))
        .route("/{id}/movies", get(director::movies))
}
