//! Acquisition configuration.

use std::time::Duration;

/// Acquisition pipeline configuration.
///
/// Backoff and pause values are deliberately tunable rather than fixed:
/// observed deployments vary them with the image provider's rate-limit
/// tolerance.
#[derive(Debug, Clone)]
pub struct AcquireConfig {
    /// Attempts per asset before falling back to the placeholder.
    pub max_attempts: u32,
    /// Fixed (non-exponential) delay between attempts on the same asset.
    pub backoff: Duration,
    /// Fixed pause between consecutive scene acquisitions.
    pub scene_pause: Duration,
    /// Base URL of the image generation service.
    pub image_base_url: String,
    /// Requested image width in pixels.
    pub image_width: u32,
    /// Requested image height in pixels.
    pub image_height: u32,
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(1500),
            scene_pause: Duration::from_millis(200),
            image_base_url: "https://image.pollinations.ai".to_string(),
            image_width: 720,
            image_height: 1280,
        }
    }
}

impl AcquireConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            max_attempts: std::env::var("SHORTS_FETCH_MAX_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),
            backoff: Duration::from_millis(
                std::env::var("SHORTS_FETCH_BACKOFF_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1500),
            ),
            scene_pause: Duration::from_millis(
                std::env::var("SHORTS_SCENE_PAUSE_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(200),
            ),
            image_base_url: std::env::var("SHORTS_IMAGE_BASE_URL")
                .unwrap_or_else(|_| "https://image.pollinations.ai".to_string()),
            image_width: std::env::var("SHORTS_IMAGE_WIDTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(720),
            image_height: std::env::var("SHORTS_IMAGE_HEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1280),
        }
    }
}
