pub mod directors;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                        list (cached), create
/// /movies/{id}                   get, update (PATCH, PUT), delete
///
/// /directors                     create
/// /directors/{id}                get, delete
/// /directors/{id}/movies         movies by director
/// ```
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router(state))
        .nest("/directors", directors::router())
}
