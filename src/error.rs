//! Error types for the Mangopay client
//!
//! Every fallible operation in this crate returns [`MangopayError`]. Errors
//! returned by the API itself are carried as [`ApiError`] descriptors whose
//! [`ErrorKind`] can be matched to implement domain-specific recovery.

use crate::classifier::{ApiError, ErrorKind};
use crate::schema::ValidationError;
use thiserror::Error;

/// Result type alias for Mangopay operations
pub type Result<T> = std::result::Result<T, MangopayError>;

/// Errors produced by the Mangopay client
#[derive(Error, Debug)]
pub enum MangopayError {
    /// The OAuth token endpoint refused to issue a bearer token
    #[error("Mangopay API Connection failure (HTTP {status})")]
    Connection { status: u16 },

    /// An outgoing payload was rejected locally, before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API answered with a 4xx error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The API answered with a 5xx error
    #[error("Mangopay API Internal Server Error (HTTP {status})")]
    InternalServer { status: u16 },

    /// Transport failure (DNS, TLS, timeout, connection refused, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested API version is not one the client knows how to speak
    #[error("Unsupported API Version: {0}")]
    UnsupportedApiVersion(String),
}

impl MangopayError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Classified kind of an API error, if this is one
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Api(api) => Some(api.kind),
            _ => None,
        }
    }

    /// Check whether this error is an API error of the given kind
    pub fn is_kind(&self, kind: ErrorKind) -> bool {
        self.kind() == Some(kind)
    }

    /// The API error descriptor, if this is one
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(api) => Some(api),
            _ => None,
        }
    }

    /// HTTP status associated with this error, when there is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Connection { status } | Self::InternalServer { status } => Some(*status),
            Self::Api(api) => Some(api.http_status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
