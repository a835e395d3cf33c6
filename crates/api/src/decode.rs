//! Request body decoding.
//!
//! Turns the raw body of a request into a typed record and classifies the
//! ways that can fail, so handlers can map each one to a response without
//! inspecting parser internals.

use axum::body::Body;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Why a request body could not be turned into a record.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body held no JSON token at all.
    #[error("empty body")]
    EmptyBody,

    /// The body was not valid JSON, or did not fit the record shape.
    #[error(transparent)]
    Malformed(#[from] serde_json::Error),

    /// The body stream failed before it was fully read (client went away,
    /// or the configured size limit was hit).
    #[error(transparent)]
    Interrupted(axum::Error),
}

/// Drain `body` (at most `limit` bytes) and decode it with [`decode_json`].
///
/// The stream is consumed exactly once; there is no retry.
pub async fn read_json<T: DeserializeOwned>(
    body: Body,
    limit: usize,
) -> Result<T, DecodeError> {
    let bytes = axum::body::to_bytes(body, limit)
        .await
        .map_err(DecodeError::Interrupted)?;

    decode_json(&bytes)
}

/// Decode the first JSON value in `bytes` into a record of type `T`.
///
/// - No bytes, or JSON whitespace only: [`DecodeError::EmptyBody`].
/// - `null`: decoded as an empty object.
/// - Anything else that is not a JSON object, an object whose fields do not
///   deserialize into `T`, or invalid UTF-8 inside a string:
///   [`DecodeError::Malformed`].
///
/// Bytes following the first complete value are left unread.
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    let mut values =
        serde_json::Deserializer::from_slice(bytes).into_iter::<Option<Map<String, Value>>>();

    let object = match values.next() {
        None => return Err(DecodeError::EmptyBody),
        Some(result) => result?.unwrap_or_default(),
    };

    Ok(serde_json::from_value(Value::Object(object))?)
}
