//! Response specification type
//!
//! A read-only view of one HTTP response: the status code and the raw body
//! bytes, plus the pure inspection helpers test cases assert on.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::failure::Failure;

/// HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// `200 OK`
    pub const OK: Self = Self(200);
    /// `400 Bad Request`
    pub const BAD_REQUEST: Self = Self(400);
    /// `404 Not Found`
    pub const NOT_FOUND: Self = Self(404);

    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// Normalized result of one probe request.
///
/// Holds only the status code and the body bytes. Headers are not part of
/// the view; every check the harness makes is over these two fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProbeResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as raw bytes.
    pub body: Vec<u8>,
}

impl ProbeResponse {
    /// Creates a new `ProbeResponse` from raw response data.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>, body: Vec<u8>) -> Self {
        Self {
            status: status.into().as_u16(),
            body,
        }
    }

    /// Returns the status as a `StatusCode` struct.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        StatusCode::new(self.status)
    }

    /// Returns true if the status code equals `code` exactly.
    #[must_use]
    pub const fn is_status(&self, code: u16) -> bool {
        self.status == code
    }

    /// Returns true if the status code is exactly 200.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.is_status(StatusCode::OK.as_u16())
    }

    /// Returns true if the status code is exactly 400.
    #[must_use]
    pub const fn is_bad_request(&self) -> bool {
        self.is_status(StatusCode::BAD_REQUEST.as_u16())
    }

    /// Returns true if the body parses as well-formed JSON.
    ///
    /// Never fails: a malformed body just yields `false`.
    #[must_use]
    pub fn is_json(&self) -> bool {
        serde_json::from_slice::<Value>(&self.body).is_ok()
    }

    /// Parses the body as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Failure::Decode`] if the body is not well-formed JSON.
    pub fn to_json(&self) -> Result<Value, Failure> {
        self.json()
    }

    /// Parses the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`Failure::Decode`] if the body is not JSON or does not match
    /// the shape of `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Failure> {
        serde_json::from_slice(&self.body).map_err(|e| {
            Failure::decode(format!("{e} in body {}", preview(&self.text())))
        })
    }

    /// Returns the body as a lossy UTF-8 string.
    ///
    /// Invalid UTF-8 sequences are replaced with the replacement character.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Returns true if the body has no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the body length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.body.len()
    }
}

/// Quotes a body for failure messages, truncated to 100 characters.
fn preview(body: &str) -> String {
    const LIMIT: usize = 100;
    if body.chars().count() > LIMIT {
        let head: String = body.chars().take(LIMIT).collect();
        format!("'{head}...'")
    } else {
        format!("'{body}'")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn response(status: u16, body: &str) -> ProbeResponse {
        ProbeResponse::new(status, body.as_bytes().to_vec())
    }

    #[test]
    fn test_is_ok_only_for_200() {
        assert!(response(200, "").is_ok());
        for status in [201, 204, 400, 404, 500] {
            assert!(!response(status, "").is_ok(), "{status} is not ok");
        }
    }

    #[test]
    fn test_is_bad_request_only_for_400() {
        assert!(response(400, "").is_bad_request());
        for status in [200, 401, 404, 422, 500] {
            assert!(!response(status, "").is_bad_request(), "{status} is not 400");
        }
    }

    #[test]
    fn test_is_status_exact() {
        let not_found = response(404, "");
        assert!(not_found.is_status(404));
        assert!(!not_found.is_status(400));
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_is_json_never_fails() {
        assert!(response(200, r#"{"email":"john@nodomain.com","active":true}"#).is_json());
        assert!(response(200, "[]").is_json());
        assert!(!response(200, "6f1c0b0e-opaque-id").is_json());
        assert!(!response(200, "").is_json());
    }

    #[test]
    fn test_to_json_round_trip() {
        let value = json!({ "email": "john@nodomain.com", "active": true });
        let resp = response(200, &value.to_string());
        assert_eq!(resp.to_json().unwrap(), value);
    }

    #[test]
    fn test_to_json_malformed_is_decode_failure() {
        let result = response(200, "not json").to_json();
        assert!(matches!(result, Err(Failure::Decode(_))));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("'not json'"), "{message}");
    }

    #[test]
    fn test_text_and_len() {
        let resp = response(200, "abc");
        assert_eq!(resp.text(), "abc");
        assert_eq!(resp.len(), 3);
        assert!(!resp.is_empty());
        assert!(ProbeResponse::default().is_empty());
    }

    #[test]
    fn test_preview_truncates() {
        let long = "x".repeat(150);
        let quoted = preview(&long);
        assert_eq!(quoted.len(), 100 + "''...".len());
        assert!(quoted.ends_with("...'"));
    }
}
