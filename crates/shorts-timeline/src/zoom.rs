//! Per-scene zoom transform.
//!
//! A slow monotonic zoom-in confined to one scene's own frame range,
//! resetting at the start of the next scene. Stateless: recomputed from the
//! frame number on every evaluation.

use crate::schedule::SceneFrameRange;

/// Zoom factor at the first frame of a scene.
pub const ZOOM_BASE: f64 = 1.0;

/// Zoom factor held from the last frame of a scene onward.
pub const ZOOM_MAX: f64 = 1.15;

/// Zoom factor for `frame` within its scene's local lifetime.
///
/// Interpolates linearly from [`ZOOM_BASE`] at the scene's first frame to
/// [`ZOOM_MAX`] at its last, clamped at both ends: frames at or past the
/// range's end hold [`ZOOM_MAX`], and the value never undershoots
/// [`ZOOM_BASE`].
pub fn zoom_factor(frame: u32, range: &SceneFrameRange) -> f64 {
    let duration = range.len();
    if duration == 0 {
        return ZOOM_MAX;
    }

    let local = frame.saturating_sub(range.start_frame) as f64;
    let progress = (local / duration as f64).clamp(0.0, 1.0);
    ZOOM_BASE + progress * (ZOOM_MAX - ZOOM_BASE)
}
