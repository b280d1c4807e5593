//! Scene frame schedule allocation.
//!
//! Partitions `[0, total_frames)` across scenes into contiguous,
//! non-overlapping integer ranges. Every boundary is recomputed from the
//! absolute scene index rather than accumulated, so floating-point rounding
//! can never open a gap or overlap between consecutive scenes, and the last
//! scene always absorbs leftover frames so the final frame is covered.

use serde::{Deserialize, Serialize};

/// Contiguous frame range owned by one scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneFrameRange {
    /// Index of the scene this range belongs to.
    pub scene_index: usize,
    /// First frame of the scene (inclusive).
    pub start_frame: u32,
    /// One past the last frame of the scene (exclusive).
    pub end_frame: u32,
}

impl SceneFrameRange {
    /// Number of frames in the range.
    pub fn len(&self) -> u32 {
        self.end_frame.saturating_sub(self.start_frame)
    }

    /// A range with no frames; such scenes are skipped at render time.
    ///
    /// Only possible when there are more scenes than frames.
    pub fn is_empty(&self) -> bool {
        self.end_frame <= self.start_frame
    }

    /// Whether `frame` falls inside this range.
    pub fn contains(&self, frame: u32) -> bool {
        frame >= self.start_frame && frame < self.end_frame
    }
}

/// Allocate `total_frames` across `scene_count` scenes.
///
/// Returns one range per scene, in order, covering `[0, total_frames)`
/// exactly. Ranges that degenerate to zero length stay in the schedule so
/// it remains 1:1 with the scene list, but they contain no frames.
pub fn allocate(scene_count: usize, total_frames: u32) -> Vec<SceneFrameRange> {
    if scene_count == 0 {
        return Vec::new();
    }

    let per_scene = total_frames as f64 / scene_count as f64;

    (0..scene_count)
        .map(|i| {
            let start_frame = (i as f64 * per_scene).floor() as u32;
            let end_frame = if i == scene_count - 1 {
                total_frames
            } else {
                ((i + 1) as f64 * per_scene).floor() as u32
            };
            SceneFrameRange {
                scene_index: i,
                start_frame,
                end_frame,
            }
        })
        .collect()
}

/// Ranges that will actually be rendered (non-degenerate ones).
pub fn rendered(ranges: &[SceneFrameRange]) -> impl Iterator<Item = &SceneFrameRange> {
    ranges.iter().filter(|r| !r.is_empty())
}

/// Find the range containing `frame`.
///
/// Degenerate ranges contain no frame, so they can never match.
pub fn range_at_frame(ranges: &[SceneFrameRange], frame: u32) -> Option<&SceneFrameRange> {
    ranges.iter().find(|r| r.contains(frame))
}
