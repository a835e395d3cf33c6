use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use student_core::error::CoreError;

use crate::decode::DecodeError;
use crate::response::{write_json, ErrorEnvelope};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`DecodeError`] for request-body failures and [`CoreError`] for
/// failures reported by the create capability. Implements [`IntoResponse`]
/// so every failure leaves the server as an [`ErrorEnvelope`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A domain-level error from `student_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- Decoding: caller faults, surfaced verbatim ---
            AppError::Decode(err) => {
                tracing::debug!(error = %err, "Rejected request body");
                (StatusCode::BAD_REQUEST, err.to_string())
            }

            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },
        };

        write_json(status, ErrorEnvelope::new(message))
    }
}
