//! Timeline synchronization and scene composition engine.
//!
//! Pure scheduling logic for short vertical videos: partitioning a known
//! total duration across scenes in integer frames with no rounding drift,
//! caption lookup over word timestamps, and the per-scene zoom transform.
//! Everything here is a function of `(frame, static schedule)` — no mutable
//! state carries across frames, which is what makes seeking and scrubbing
//! correct.

pub mod captions;
pub mod duration;
pub mod normalize;
pub mod schedule;
pub mod timeline;
pub mod zoom;

pub use captions::active_caption;
pub use duration::estimate_total_frames;
pub use normalize::normalize_prompts;
pub use schedule::{allocate, SceneFrameRange};
pub use timeline::{Timeline, TimelineConfig};
pub use zoom::{zoom_factor, ZOOM_BASE, ZOOM_MAX};
