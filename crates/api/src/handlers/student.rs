//! Handlers for student ingestion.
//!
//! Decodes the request body, hands the record to the configured
//! [`StudentCreator`](student_core::creator::StudentCreator), and
//! acknowledges with `201 {"success":"OK"}`. Every failure is answered with
//! a `{"error": ...}` envelope via [`AppError`](crate::error::AppError).

use axum::body::Body;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use student_core::student::StudentCreateRequest;

use crate::decode::read_json;
use crate::error::AppResult;
use crate::response::{write_json, SuccessEnvelope};
use crate::state::AppState;

/// POST /api/v1/students
///
/// | Body                      | Status | Response                 |
/// |---------------------------|--------|--------------------------|
/// | empty                     | 400    | `{"error":"empty body"}` |
/// | malformed / wrong shape   | 400    | `{"error":"<parser message>"}` |
/// | JSON object               | 201    | `{"success":"OK"}`       |
pub async fn create_student(
    State(state): State<AppState>,
    body: Body,
) -> AppResult<impl IntoResponse> {
    tracing::info!("Creating data for a student");

    let student: StudentCreateRequest = read_json(body, state.config.max_body_bytes).await?;

    state.creator.create(&student).await?;

    tracing::debug!(name = ?student.name, "Student create request accepted");

    Ok(write_json(StatusCode::CREATED, SuccessEnvelope::ok()))
}
