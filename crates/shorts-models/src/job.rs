//! Video generation phase state machine.
//!
//! One generation request walks Idle -> Scripting -> Voicing ->
//! AcquiringScenes -> Ready, or lands in Failed from any active phase.
//! Transitions are only triggered by completion or failure of the
//! corresponding external call; the timeline engine itself never drives a
//! transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one video generation request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh request ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phase of the video generation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    /// No request in flight.
    #[default]
    Idle,
    /// Scraping the article and generating the narration script.
    Scripting,
    /// Synthesizing speech and transcribing word timestamps.
    Voicing,
    /// Acquiring one image per scene, sequentially.
    AcquiringScenes,
    /// Plan assembled; playback may start.
    Ready,
    /// An upstream collaborator failed.
    Failed,
}

impl GenerationPhase {
    /// Get string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPhase::Idle => "idle",
            GenerationPhase::Scripting => "scripting",
            GenerationPhase::Voicing => "voicing",
            GenerationPhase::AcquiringScenes => "acquiring_scenes",
            GenerationPhase::Ready => "ready",
            GenerationPhase::Failed => "failed",
        }
    }

    /// Check if this is a terminal phase (no more transitions expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationPhase::Ready | GenerationPhase::Failed)
    }

    /// Whether the machine may move from this phase to `next`.
    ///
    /// Forward progress follows the pipeline order; any active phase may
    /// fail; terminal phases only reset back to Idle for a new request.
    pub fn can_transition_to(&self, next: GenerationPhase) -> bool {
        use GenerationPhase::*;
        match (*self, next) {
            (Idle, Scripting) => true,
            (Scripting, Voicing) => true,
            (Voicing, AcquiringScenes) => true,
            (AcquiringScenes, Ready) => true,
            (Scripting | Voicing | AcquiringScenes, Failed) => true,
            (Ready | Failed, Idle) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error raised by an illegal phase transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("illegal generation phase transition: {from} -> {to}")]
pub struct PhaseTransitionError {
    /// Phase the machine was in.
    pub from: GenerationPhase,
    /// Phase the caller attempted to enter.
    pub to: GenerationPhase,
}

/// Timestamped status of one generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationStatus {
    /// The request this status belongs to.
    pub request_id: RequestId,
    /// Current pipeline phase.
    pub phase: GenerationPhase,
    /// Human-readable description of the current step.
    pub detail: Option<String>,
    /// Error message when the phase is Failed.
    pub error_message: Option<String>,
    /// When the request started.
    pub started_at: DateTime<Utc>,
    /// When the status last changed.
    pub updated_at: DateTime<Utc>,
}

impl GenerationStatus {
    /// Create a fresh status in the Idle phase.
    pub fn new(request_id: RequestId) -> Self {
        let now = Utc::now();
        Self {
            request_id,
            phase: GenerationPhase::Idle,
            detail: None,
            error_message: None,
            started_at: now,
            updated_at: now,
        }
    }

    /// Check if the request is in a terminal phase.
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Advance to `next`, rejecting transitions the machine does not allow.
    pub fn advance(&mut self, next: GenerationPhase) -> Result<(), PhaseTransitionError> {
        if !self.phase.can_transition_to(next) {
            return Err(PhaseTransitionError {
                from: self.phase,
                to: next,
            });
        }
        self.phase = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Update the human-readable step description.
    pub fn set_detail(&mut self, detail: impl Into<String>) {
        self.detail = Some(detail.into());
        self.updated_at = Utc::now();
    }

    /// Mark the request failed with an error message.
    ///
    /// Valid from any active phase; a no-op error if already terminal.
    pub fn fail(&mut self, error: impl Into<String>) -> Result<(), PhaseTransitionError> {
        self.advance(GenerationPhase::Failed)?;
        self.error_message = Some(error.into());
        Ok(())
    }
}
