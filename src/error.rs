//! Fetch Errors
//!
//! Failure taxonomy for backend requests.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read
    #[error("network error: {0}")]
    Network(String),

    /// Body is not JSON of the expected shape
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Server answered with a non-2xx status
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = FetchError::Status { status: 500, message: Some("Error querying database".into()) };
        assert_eq!(err.to_string(), "server returned 500: Error querying database");

        let err = FetchError::Status { status: 502, message: None };
        assert_eq!(err.to_string(), "server returned 502: no message");
    }

    #[test]
    fn test_from_serde_error_is_decode() {
        let err: FetchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
