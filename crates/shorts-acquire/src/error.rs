//! Error types for asset acquisition.

use thiserror::Error;

/// Result type for acquisition operations.
pub type AcquireResult<T> = Result<T, AcquireError>;

/// Errors that can surface from the acquisition pipeline.
///
/// Transient fetch failures are recovered internally (retry, then
/// placeholder substitution) and never reach the caller; cancellation is
/// the only condition that halts the pipeline mid-flight.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("Acquisition cancelled")]
    Cancelled,

    #[error("HTTP client construction failed: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_display() {
        assert_eq!(AcquireError::Cancelled.to_string(), "Acquisition cancelled");
    }
}
