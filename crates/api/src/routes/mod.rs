pub mod health;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /students                                        create (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/students", student::router())
}
