//! Error types for collaborator clients.

use thiserror::Error;

/// Result type for collaborator operations.
pub type AiResult<T> = Result<T, AiError>;

/// Errors from the upstream collaborators.
///
/// These are the only failures the system surfaces to the user: everything
/// downstream of a successful script/audio acquisition has a defined
/// fallback instead.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid source URL: {0}")]
    InvalidUrl(String),

    #[error("Insufficient content extracted from page ({0} chars)")]
    InsufficientContent(usize),

    #[error("Empty response from service")]
    EmptyResponse,

    #[error("Failed to parse service response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Service not configured: {0}")]
    NotConfigured(&'static str),
}

impl AiError {
    /// Create a request failure error.
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::RequestFailed(message.into())
    }

    /// Whether a retry may help.
    ///
    /// Network-level failures are retryable; malformed input, parse
    /// failures, and missing configuration are not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AiError::Network(_))
    }
}
