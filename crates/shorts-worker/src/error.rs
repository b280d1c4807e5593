//! Error types for the generation orchestrator.

use thiserror::Error;

use shorts_acquire::AcquireError;
use shorts_ai_client::AiError;
use shorts_models::job::PhaseTransitionError;

/// Result type for orchestration operations.
pub type WorkerResult<T> = Result<T, WorkerError>;

/// Errors that can end a generation request.
///
/// Only collaborator failures and cancellation reach the user; the
/// timeline engine and the acquisition fallbacks never produce an error of
/// their own.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Collaborator call failed: {0}")]
    Ai(#[from] AiError),

    #[error(transparent)]
    Acquire(#[from] AcquireError),

    #[error("Generation state error: {0}")]
    Phase(#[from] PhaseTransitionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorkerError {
    /// Whether this error is a caller-initiated cancellation rather than a
    /// failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, WorkerError::Acquire(AcquireError::Cancelled))
    }
}
