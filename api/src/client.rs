//! Remote API gateway.
//!
//! A single `call` builds the full URL from the configured backend origin,
//! attaches the persisted session token, and parses the backend's uniform
//! JSON envelope regardless of HTTP status code. Application-level failure
//! (`status != "success"`) is converted into a typed [`ApiError::Api`] so
//! every caller's error branch is compiler-checked instead of relying on
//! inspecting a `status` field by convention.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::OnceLock;

pub use reqwest::Method;

use crate::storage;

/// Request header the session token is echoed on.
pub const TOKEN_HEADER: &str = "vs-token";

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/api/v1";

static BACKEND_URL: OnceLock<String> = OnceLock::new();

/// Install the backend origin. Called once at startup; later calls are
/// ignored so the origin stays stable for the page lifetime.
pub fn set_backend_url(origin: &str) {
    let _ = BACKEND_URL.set(origin.trim_end_matches('/').to_string());
}

fn backend_url() -> &'static str {
    BACKEND_URL
        .get()
        .map(String::as_str)
        .unwrap_or(DEFAULT_BACKEND_URL)
}

/// Uniform response body: every endpoint answers with at least a `status`
/// and usually a `message` and/or a `data` payload.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub message: Option<String>,
    pub data: Option<T>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a parseable response (network down,
    /// malformed body).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered but reported failure inside the envelope.
    #[error("{message}")]
    Api { status_code: u16, message: String },
}

/// Issue one request against the configured origin and return the parsed
/// envelope on application-level success.
pub async fn call<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<Envelope<T>, ApiError> {
    let url = format!("{}{}", backend_url(), path);

    // The wasm client is cheap to construct and not Sync, so build per call.
    let mut request = reqwest::Client::new()
        .request(method, &url)
        .header(reqwest::header::CONTENT_TYPE, "application/json");
    if let Some(token) = storage::load_token() {
        request = request.header(TOKEN_HEADER, token);
    }
    if let Some(ref body) = body {
        request = request.json(body);
    }

    let response = request.send().await?;
    let http_status = response.status().as_u16();
    // Error envelopes arrive on non-2xx statuses; parse the body either way.
    let envelope = response.json::<Envelope<T>>().await?;
    check_envelope(http_status, envelope)
}

/// Apply the success contract to a parsed envelope.
pub fn check_envelope<T>(http_status: u16, envelope: Envelope<T>) -> Result<Envelope<T>, ApiError> {
    if envelope.status == "success" {
        Ok(envelope)
    } else {
        Err(ApiError::Api {
            status_code: http_status,
            message: envelope
                .message
                .unwrap_or_else(|| "request failed".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: u32,
    }

    #[test]
    fn success_envelope_passes_through() {
        let envelope: Envelope<Payload> =
            serde_json::from_str(r#"{"status":"success","data":{"value":7}}"#).unwrap();
        let checked = check_envelope(200, envelope).unwrap();
        assert_eq!(checked.data, Some(Payload { value: 7 }));
        assert_eq!(checked.message, None);
    }

    // Payload deliberately has no Default impl; missing optional envelope
    // fields must still parse as None.
    #[test]
    fn optional_fields_parse_as_none_without_a_default_payload() {
        let envelope: Envelope<Payload> =
            serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(envelope.message, None);
        assert_eq!(envelope.data, None);
    }

    #[test]
    fn failure_envelope_becomes_typed_error() {
        let envelope: Envelope<Payload> =
            serde_json::from_str(r#"{"status":"error","message":"Role already exists"}"#).unwrap();
        match check_envelope(409, envelope) {
            Err(ApiError::Api {
                status_code,
                message,
            }) => {
                assert_eq!(status_code, 409);
                assert_eq!(message, "Role already exists");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn failure_without_message_gets_a_fallback() {
        let envelope: Envelope<Payload> = serde_json::from_str(r#"{"status":"fail"}"#).unwrap();
        match check_envelope(500, envelope) {
            Err(ApiError::Api { message, .. }) => assert_eq!(message, "request failed"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
