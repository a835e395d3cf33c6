use axum::routing::post;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// POST   /                  -> create_student
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(student::create_student))
}
