//! Active caption lookup.

use shorts_models::CaptionUnit;

/// Find the caption unit active at `time_seconds`, if any.
///
/// Intervals are inclusive on both ends and the first matching unit wins,
/// so at a boundary instant shared by two adjacent units the earlier unit
/// is returned. That tie-break is deliberate and load-bearing for
/// back-to-back words.
///
/// Stateless by design: evaluated fresh every frame, so seeking to an
/// arbitrary time produces the correct caption without replaying anything.
pub fn active_caption(time_seconds: f64, captions: &[CaptionUnit]) -> Option<&CaptionUnit> {
    captions.iter().find(|c| c.contains(time_seconds))
}
