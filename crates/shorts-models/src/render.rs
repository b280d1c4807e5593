//! Render output specification.
//!
//! Aspect and resolution are opaque to the timeline engine; they are passed
//! through to the renderer and to the image service request builder.

use serde::{Deserialize, Serialize};

/// Target output geometry and frame rate for the rendered video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSpec {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Frames per second; all scheduling is done in integer frames at this
    /// rate.
    pub frame_rate: u32,
}

impl Default for RenderSpec {
    fn default() -> Self {
        // Vertical 9:16 at 30fps.
        Self {
            width: 1080,
            height: 1920,
            frame_rate: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_spec_default_is_vertical() {
        let spec = RenderSpec::default();
        assert!(spec.height > spec.width);
        assert_eq!(spec.frame_rate, 30);
    }
}
