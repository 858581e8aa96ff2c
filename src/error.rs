//! Error types for the moibit library.

use thiserror::Error;

use crate::api::DecodeStage;
use crate::fs::PathError;

/// Main error type for moibit operations.
#[derive(Error, Debug)]
pub enum MoiBitError {
    /// A path was rejected before any request was built.
    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathError),

    /// The signature/nonce exchange did not yield a developer key.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// HTTP request failed with status code.
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network request error.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The response body did not match the expected shape.
    #[error("response decode failed [HTTP {status}] at {stage}: {source}")]
    DecodeError {
        stage: DecodeStage,
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Request serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The envelope decoded but `meta.code` was not 200.
    #[error("non-ok response [{code}]: {message}")]
    ApiError { code: i64, message: String },

    /// File content cannot be carried in the `text` field.
    #[error("file content is not valid UTF-8: {0}")]
    InvalidContent(#[from] std::str::Utf8Error),

    /// A service URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The operation needs an app ID and none was configured.
    #[error("request failed: no appID set for session")]
    MissingAppId,
}

impl MoiBitError {
    /// Server-reported `(code, message)`, if this is an [`MoiBitError::ApiError`].
    pub fn api_error(&self) -> Option<(i64, &str)> {
        match self {
            MoiBitError::ApiError { code, message } => Some((*code, message.as_str())),
            _ => None,
        }
    }
}

/// Result type alias for moibit operations.
pub type Result<T> = std::result::Result<T, MoiBitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = MoiBitError::ApiError {
            code: 404,
            message: "file not found".to_string(),
        };
        assert_eq!(err.to_string(), "non-ok response [404]: file not found");
        assert_eq!(err.api_error(), Some((404, "file not found")));
        assert_eq!(MoiBitError::HttpError(500).api_error(), None);
    }

    #[test]
    fn test_path_error_conversion() {
        let err: MoiBitError = PathError::MultiplePeriods.into();
        assert!(matches!(err, MoiBitError::InvalidPath(PathError::MultiplePeriods)));
        assert!(err.to_string().contains("multiple periods in final element"));
    }
}
