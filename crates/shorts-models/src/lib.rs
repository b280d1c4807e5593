//! Shared data models for the AutoShorts pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Word-level caption units from narration transcription
//! - Scene prompts and acquired scene assets
//! - Script generation results
//! - The video generation phase state machine
//! - Render output specification (aspect/resolution passthrough)

pub mod caption;
pub mod job;
pub mod render;
pub mod scene;
pub mod script;

// Re-export common types
pub use caption::CaptionUnit;
pub use job::{GenerationPhase, GenerationStatus, PhaseTransitionError, RequestId};
pub use render::RenderSpec;
pub use scene::{SceneAsset, ScenePrompt};
pub use script::ScriptResult;
