//! Portal client error types
use std::fmt;

use thiserror::Error;

/// Result type for portal operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Classification payload carried by portal API errors.
///
/// Every field is optional on the wire; renderers fall back to the defaults
/// on [`ClientError`] when a field is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorShape {
    pub http_status: Option<u16>,
    pub code: Option<String>,
    pub message: Option<String>,
}

impl fmt::Display for ErrorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.http_status {
            Some(status) => write!(f, "status {}", status)?,
            None => write!(f, "status unknown")?,
        }
        if let Some(code) = &self.code {
            write!(f, ", {}", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

/// Portal-specific error types
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API error ({0})")]
    Api(ErrorShape),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Status assumed when the error carries none.
    pub const DEFAULT_STATUS: u16 = 500;

    /// Code rendered when the error carries none.
    pub const DEFAULT_CODE: &'static str = "An error occurred";

    /// Message rendered when the error carries none.
    pub const DEFAULT_MESSAGE: &'static str =
        "An error occurred while trying to load this page. Please try again later.";

    /// Create an API error from its classification fields
    pub fn api(http_status: impl Into<Option<u16>>, code: Option<String>, message: Option<String>) -> Self {
        Self::Api(ErrorShape {
            http_status: http_status.into(),
            code,
            message,
        })
    }

    /// HTTP-equivalent status carried by the error, if any
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Api(shape) => shape.http_status,
            _ => None,
        }
    }

    pub fn status_or_default(&self) -> u16 {
        self.http_status().unwrap_or(Self::DEFAULT_STATUS)
    }

    pub fn code_or_default(&self) -> &str {
        match self {
            Self::Api(ErrorShape { code: Some(code), .. }) => code,
            _ => Self::DEFAULT_CODE,
        }
    }

    pub fn message_or_default(&self) -> &str {
        match self {
            Self::Api(ErrorShape { message: Some(message), .. }) => message,
            _ => Self::DEFAULT_MESSAGE,
        }
    }

    /// Expected-absence condition: the resource does not exist.
    ///
    /// Rendered as a not-found view, never reported to monitoring.
    pub fn is_not_found(&self) -> bool {
        self.http_status() == Some(404)
    }

    /// Check if this is a network-related error
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
