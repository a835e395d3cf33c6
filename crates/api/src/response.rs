//! Response envelopes and the single JSON writer every handler goes through.
//!
//! Success acknowledgments use [`SuccessEnvelope`] (`{"success": "OK"}`),
//! failures use [`ErrorEnvelope`] (`{"error": "..."}`). Build responses with
//! [`write_json`] instead of ad-hoc `serde_json::json!` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `{ "error": message }` body describing a single failure.
///
/// The message is surfaced to the client as-is and carries no further
/// structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// `{ "success": "OK" }` body acknowledging a completed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuccessEnvelope {
    pub success: &'static str,
}

impl SuccessEnvelope {
    pub fn ok() -> Self {
        Self { success: "OK" }
    }
}

/// Serialize `payload` as the JSON body of a response with `status`.
///
/// The returned [`Response`] is complete; nothing else is written for the
/// request once it is returned from the handler.
pub fn write_json<T: Serialize>(status: StatusCode, payload: T) -> Response {
    (status, Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::header::CONTENT_TYPE;
    use http_body_util::BodyExt;

    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn success_envelope_is_exact() {
        let response = write_json(StatusCode::CREATED, SuccessEnvelope::ok());

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_string(response).await, r#"{"success":"OK"}"#);
    }

    #[tokio::test]
    async fn error_envelope_is_exact() {
        let response = write_json(StatusCode::BAD_REQUEST, ErrorEnvelope::new("empty body"));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, r#"{"error":"empty body"}"#);
    }

    #[tokio::test]
    async fn error_message_is_escaped_not_interpreted() {
        let response = write_json(
            StatusCode::BAD_REQUEST,
            ErrorEnvelope::new(r#"bad "quote" and \ slash"#),
        );

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], r#"bad "quote" and \ slash"#);
    }
}
