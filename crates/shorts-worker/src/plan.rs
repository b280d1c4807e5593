//! The assembled video plan.

use serde::{Deserialize, Serialize};

use shorts_models::{CaptionUnit, RenderSpec, SceneAsset};
use shorts_timeline::Timeline;

use crate::config::GeneratorConfig;

/// Everything a player needs to render one short video.
///
/// Built once per request after acquisition completes; immutable
/// thereafter. The timeline inside answers every per-frame query (active
/// scene, caption, zoom) as a pure function of the frame number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoPlan {
    /// The narrated script, for display and debugging.
    pub script_text: String,
    /// Narration audio as a `data:` URL.
    pub audio_data_url: String,
    /// Output geometry and frame rate (opaque passthrough).
    pub render: RenderSpec,
    /// Frame schedule, captions, and scene assets.
    pub timeline: Timeline,
}

impl VideoPlan {
    /// Assemble the plan from the pipeline's outputs.
    pub fn assemble(
        script_text: String,
        audio_data_url: String,
        captions: Vec<CaptionUnit>,
        assets: Vec<SceneAsset>,
        config: &GeneratorConfig,
    ) -> Self {
        let timeline = Timeline::build(
            captions,
            assets,
            config.render.frame_rate,
            config.margin_seconds,
            config.default_duration_seconds,
        );

        Self {
            script_text,
            audio_data_url,
            render: config.render,
            timeline,
        }
    }

    /// Total frames in the presentation.
    pub fn total_frames(&self) -> u32 {
        self.timeline.config().total_frames
    }

    /// Number of scenes in the schedule.
    pub fn scene_count(&self) -> usize {
        self.timeline.config().scene_count
    }
}
