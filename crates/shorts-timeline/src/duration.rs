//! Total presentation duration from caption timing.

use shorts_models::caption::{last_end, CaptionUnit};

/// Derive the total frame count from the narration's caption timing.
///
/// The presentation runs until the last spoken word ends, plus a safety
/// margin so the final word is not cut off. With no captions at all (no
/// narration timestamps available) the configured default duration applies
/// instead, unpadded.
///
/// The result is always at least 1 for positive inputs, so a schedule can
/// be allocated over it.
pub fn estimate_total_frames(
    captions: &[CaptionUnit],
    frame_rate: u32,
    margin_seconds: f64,
    default_seconds: f64,
) -> u32 {
    let total_seconds = match last_end(captions) {
        Some(end) => end + margin_seconds,
        None => default_seconds,
    };

    (total_seconds * frame_rate as f64).ceil() as u32
}
