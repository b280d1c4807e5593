//! Assembled timeline and the renderer-facing query surface.

use serde::{Deserialize, Serialize};

use shorts_models::{CaptionUnit, SceneAsset};

use crate::captions::active_caption;
use crate::duration::estimate_total_frames;
use crate::schedule::{allocate, range_at_frame, SceneFrameRange};
use crate::zoom::zoom_factor;

/// Static timing configuration for one video.
///
/// Derived once from the duration estimator and the normalized scene list;
/// read-only for the lifetime of the video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Total number of frames in the presentation.
    pub total_frames: u32,
    /// Frames per second.
    pub frame_rate: u32,
    /// Number of scenes the timeline is partitioned into.
    pub scene_count: usize,
}

/// Frame-accurate schedule for one video, paired 1:1 with its assets.
///
/// Built once after acquisition completes and immutable thereafter. Every
/// query is a pure function of the frame number, so a player can sample
/// frames in any order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    config: TimelineConfig,
    ranges: Vec<SceneFrameRange>,
    captions: Vec<CaptionUnit>,
    assets: Vec<SceneAsset>,
}

impl Timeline {
    /// Build the timeline from acquired assets and caption timing.
    ///
    /// The total duration comes from the last caption's end plus
    /// `margin_seconds`, or `default_seconds` when no captions exist; the
    /// frame span is then partitioned across `assets.len()` scenes.
    pub fn build(
        captions: Vec<CaptionUnit>,
        assets: Vec<SceneAsset>,
        frame_rate: u32,
        margin_seconds: f64,
        default_seconds: f64,
    ) -> Self {
        let total_frames =
            estimate_total_frames(&captions, frame_rate, margin_seconds, default_seconds);
        let ranges = allocate(assets.len(), total_frames);

        Self {
            config: TimelineConfig {
                total_frames,
                frame_rate,
                scene_count: assets.len(),
            },
            ranges,
            captions,
            assets,
        }
    }

    /// Timing configuration.
    pub fn config(&self) -> TimelineConfig {
        self.config
    }

    /// The full scene schedule, 1:1 with [`Timeline::assets`].
    pub fn ranges(&self) -> &[SceneFrameRange] {
        &self.ranges
    }

    /// Acquired scene assets, 1:1 with [`Timeline::ranges`].
    pub fn assets(&self) -> &[SceneAsset] {
        &self.assets
    }

    /// Caption units in narration order.
    pub fn captions(&self) -> &[CaptionUnit] {
        &self.captions
    }

    /// Presentation time of `frame` in seconds.
    pub fn time_at_frame(&self, frame: u32) -> f64 {
        frame as f64 / self.config.frame_rate as f64
    }

    /// The scene visible at `frame`, with its range.
    ///
    /// Returns `None` past the end of the timeline. Degenerate ranges own
    /// no frames and are skipped automatically.
    pub fn scene_at_frame(&self, frame: u32) -> Option<(&SceneFrameRange, &SceneAsset)> {
        let range = range_at_frame(&self.ranges, frame)?;
        Some((range, &self.assets[range.scene_index]))
    }

    /// The caption active at `frame`, if any.
    pub fn active_caption_at_frame(&self, frame: u32) -> Option<&CaptionUnit> {
        active_caption(self.time_at_frame(frame), &self.captions)
    }

    /// Zoom factor for `frame`, local to the scene that owns it.
    ///
    /// Outside any scene (past the timeline end) the base factor applies.
    pub fn zoom_factor_at(&self, frame: u32) -> f64 {
        match self.scene_at_frame(frame) {
            Some((range, _)) => zoom_factor(frame, range),
            None => crate::zoom::ZOOM_BASE,
        }
    }

    /// Zoom factor for `frame` evaluated against a specific scene's range.
    ///
    /// Returns `None` for an out-of-bounds scene index.
    pub fn zoom_factor(&self, frame: u32, scene_index: usize) -> Option<f64> {
        self.ranges.get(scene_index).map(|r| zoom_factor(frame, r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoom::{ZOOM_BASE, ZOOM_MAX};

    fn assets(n: usize) -> Vec<SceneAsset> {
        (0..n)
            .map(|i| SceneAsset::confirmed(format!("https://img.example/{i}.jpg")))
            .collect()
    }

    fn captions() -> Vec<CaptionUnit> {
        vec![
            CaptionUnit::new("hello", 0.0, 0.5),
            CaptionUnit::new("short", 0.5, 1.0),
            CaptionUnit::new("video", 1.2, 2.5),
        ]
    }

    #[test]
    fn test_build_derives_config_from_inputs() {
        let timeline = Timeline::build(captions(), assets(7), 30, 1.5, 30.0);
        let config = timeline.config();

        // ceil((2.5 + 1.5) * 30) = 120
        assert_eq!(config.total_frames, 120);
        assert_eq!(config.scene_count, 7);
        assert_eq!(timeline.ranges().len(), timeline.assets().len());
    }

    #[test]
    fn test_every_frame_maps_to_exactly_one_scene() {
        let timeline = Timeline::build(captions(), assets(7), 30, 1.5, 30.0);

        for frame in 0..timeline.config().total_frames {
            let (range, _) = timeline.scene_at_frame(frame).unwrap();
            assert!(range.contains(frame));
        }
        assert!(timeline
            .scene_at_frame(timeline.config().total_frames)
            .is_none());
    }

    #[test]
    fn test_caption_query_is_frame_indexed() {
        let timeline = Timeline::build(captions(), assets(3), 30, 1.5, 30.0);

        // Frame 15 -> 0.5s: the boundary shared by "hello" and "short"
        // resolves to the earlier unit.
        assert_eq!(timeline.active_caption_at_frame(15).unwrap().word, "hello");
        // Frame 33 -> 1.1s: inter-word silence.
        assert!(timeline.active_caption_at_frame(33).is_none());
        // Frame 45 -> 1.5s.
        assert_eq!(timeline.active_caption_at_frame(45).unwrap().word, "video");
    }

    #[test]
    fn test_zoom_resets_at_scene_boundary() {
        let timeline = Timeline::build(Vec::new(), assets(2), 30, 1.5, 4.0);
        // 120 frames, two scenes of 60.
        assert_eq!(timeline.zoom_factor_at(0), ZOOM_BASE);
        assert!(timeline.zoom_factor_at(59) > ZOOM_BASE);
        assert_eq!(timeline.zoom_factor_at(60), ZOOM_BASE);
        assert!((timeline.zoom_factor_at(119) - ZOOM_MAX).abs() < 0.01);
    }

    #[test]
    fn test_zoom_by_scene_index() {
        let timeline = Timeline::build(Vec::new(), assets(2), 30, 1.5, 4.0);
        // Scene 1 spans [60, 120); frame 60 is its first frame.
        assert_eq!(timeline.zoom_factor(60, 1), Some(ZOOM_BASE));
        // Scene 0's range is over by frame 60, so it holds the max.
        assert_eq!(timeline.zoom_factor(60, 0), Some(ZOOM_MAX));
        assert_eq!(timeline.zoom_factor(0, 5), None);
    }

    #[test]
    fn test_zoom_past_timeline_end_is_base() {
        let timeline = Timeline::build(Vec::new(), assets(2), 30, 1.5, 4.0);
        assert_eq!(timeline.zoom_factor_at(10_000), ZOOM_BASE);
    }

    #[test]
    fn test_no_captions_uses_default_duration() {
        let timeline = Timeline::build(Vec::new(), assets(7), 30, 1.5, 5.0);
        assert_eq!(timeline.config().total_frames, 150);
        assert!(timeline.active_caption_at_frame(10).is_none());
    }

    #[test]
    fn test_timeline_serde_roundtrip() {
        let timeline = Timeline::build(captions(), assets(3), 30, 1.5, 30.0);
        let json = serde_json::to_string(&timeline).unwrap();
        let back: Timeline = serde_json::from_str(&json).unwrap();

        assert_eq!(back.config(), timeline.config());
        assert_eq!(back.ranges(), timeline.ranges());
        assert_eq!(back.assets(), timeline.assets());
    }
}
