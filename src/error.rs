//! Error types for rollbar-deploy
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.
//!
//! Only transport failures cross the notifier boundary. A deployment that the
//! service refuses (any non-200 response) is logged, never returned as an error.

use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for rollbar-deploy operations
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Main error type for rollbar-deploy operations
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The request never produced an HTTP response
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A required deploy setting was not provided by any config source
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// Access token failed format validation
    #[error("invalid access token: {reason}")]
    InvalidAccessToken { reason: String },

    /// Endpoint is not an http(s) URL
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The HTTP client itself could not be built (TLS backend, proxy config)
    #[error("failed to set up HTTP client: {0}")]
    HttpClient(TransportError),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NotifyError {
    /// True when the failure happened on the wire rather than in setup.
    pub fn is_transport(&self) -> bool {
        matches!(self, NotifyError::Transport(_))
    }
}

/// Network-level failure: connection refused, DNS, aborted request, bad URL.
///
/// `Display` is exactly the underlying transport's message so callers see the
/// same text the HTTP client reported.
#[derive(Debug)]
pub struct TransportError {
    message: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a client error, keeping it as the cause.
    pub fn from_source<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_missing_field() {
        let err = NotifyError::MissingField { field: "revision" };
        assert_eq!(err.to_string(), "missing required field 'revision'");
    }

    #[test]
    fn test_transport_error_display_is_underlying_message() {
        let err: NotifyError = TransportError::new("something awful happened").into();
        assert_eq!(err.to_string(), "something awful happened");
        assert!(err.is_transport());
    }

    #[test]
    fn test_transport_error_keeps_source() {
        let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let err = TransportError::from_source(io_err);

        assert_eq!(err.message(), "connection refused");
        let source = err.source().expect("source should be kept");
        assert_eq!(source.to_string(), "connection refused");
    }

    #[test]
    fn test_client_setup_error_is_not_transport() {
        let err = NotifyError::HttpClient(TransportError::new("no TLS backend"));
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "failed to set up HTTP client: no TLS backend"
        );
    }

    #[test]
    fn test_config_errors_are_not_transport() {
        let err = NotifyError::InvalidEndpoint {
            endpoint: "ftp://example.com".to_string(),
            reason: "unsupported scheme 'ftp'".to_string(),
        };
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "invalid endpoint 'ftp://example.com': unsupported scheme 'ftp'"
        );
    }
}
