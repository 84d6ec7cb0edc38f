//! Error handling module for the Rancher API client

use std::fmt;

use reqwest::header::HeaderMap;
use serde::Deserialize;

pub type Result<T> = std::result::Result<T, RancherError>;

/// All failures surfaced by the client.
///
/// Resource methods only ever fail with `Transport` or `Api` once a call is
/// dispatched; `Config` and `Validation` are raised synchronously before any
/// network activity.
#[derive(Debug, thiserror::Error)]
pub enum RancherError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("{0}")]
    Api(ApiError),
}

impl RancherError {
    pub fn is_transport(&self) -> bool {
        matches!(self, RancherError::Transport(_))
    }

    /// Borrow the API error detail, if the server answered with a non-2xx
    /// status.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            RancherError::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RancherError {
    fn from(err: reqwest::Error) -> Self {
        RancherError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for RancherError {
    fn from(err: serde_json::Error) -> Self {
        RancherError::Transport(err.to_string())
    }
}

/// Error body shape the platform returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    #[serde(rename = "fieldName")]
    field_name: Option<String>,
    message: Option<String>,
}

/// The server answered with a status outside [200, 300).
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: u16,
    pub headers: HeaderMap,
    pub message: String,
    /// Raw response body, kept when the error payload did not decode.
    pub body: Option<String>,
}

impl ApiError {
    /// Build the error from a completed round trip.
    ///
    /// A decodable platform error body contributes its `code`, `fieldName`,
    /// and `message` fields to the message; anything else falls back to a
    /// generic message with the raw body preserved.
    pub(crate) fn from_response(status: u16, headers: HeaderMap, raw_body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(raw_body) {
            Ok(decoded) => {
                let message = format!(
                    "Invalid response code: {}. Error: {}. Field: {}. {}",
                    status,
                    decoded.code.as_deref().unwrap_or("unknown"),
                    decoded.field_name.as_deref().unwrap_or("unknown"),
                    decoded.message.as_deref().unwrap_or(""),
                );
                ApiError { status, headers, message, body: None }
            }
            Err(_) => ApiError {
                status,
                headers,
                message: format!("Invalid response code: {}", status),
                body: Some(raw_body.to_string()),
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_composes_platform_fields() {
        let body = r#"{"code":"NotFound","fieldName":"id","message":"no such container"}"#;
        let err = ApiError::from_response(404, HeaderMap::new(), body);

        assert_eq!(err.status, 404);
        assert_eq!(
            err.message,
            "Invalid response code: 404. Error: NotFound. Field: id. no such container"
        );
        assert!(err.body.is_none());
    }

    #[test]
    fn test_api_error_partial_platform_fields() {
        let body = r#"{"message":"throttled"}"#;
        let err = ApiError::from_response(429, HeaderMap::new(), body);

        assert_eq!(
            err.message,
            "Invalid response code: 429. Error: unknown. Field: unknown. throttled"
        );
    }

    #[test]
    fn test_api_error_generic_for_undecodable_body() {
        let err = ApiError::from_response(502, HeaderMap::new(), "<html>bad gateway</html>");

        assert_eq!(err.message, "Invalid response code: 502");
        assert_eq!(err.body.as_deref(), Some("<html>bad gateway</html>"));
    }

    #[test]
    fn test_transport_from_serde_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = RancherError::from(parse_err);
        assert!(err.is_transport());
    }

    #[test]
    fn test_as_api_accessor() {
        let api = ApiError::from_response(500, HeaderMap::new(), "");
        let err = RancherError::Api(api);
        assert_eq!(err.as_api().map(|e| e.status), Some(500));
        assert!(RancherError::Validation("x".into()).as_api().is_none());
    }
}
