//! Generator configuration.

use std::time::Duration;

use shorts_models::RenderSpec;

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Fixed number of scenes every video is partitioned into.
    pub scene_count: usize,
    /// Safety margin added after the last caption, in seconds.
    pub margin_seconds: f64,
    /// Total duration used when no captions exist, in seconds.
    pub default_duration_seconds: f64,
    /// Output geometry and frame rate, passed through to the player.
    pub render: RenderSpec,
    /// Timeout for individual image probes.
    pub fetch_timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            scene_count: 7,
            margin_seconds: 1.5,
            default_duration_seconds: 30.0,
            render: RenderSpec::default(),
            fetch_timeout: Duration::from_secs(20),
        }
    }
}

impl GeneratorConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            scene_count: std::env::var("SHORTS_SCENE_COUNT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(7),
            margin_seconds: std::env::var("SHORTS_MARGIN_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1.5),
            default_duration_seconds: std::env::var("SHORTS_DEFAULT_DURATION_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30.0),
            render: RenderSpec {
                width: std::env::var("SHORTS_WIDTH")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1080),
                height: std::env::var("SHORTS_HEIGHT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1920),
                frame_rate: std::env::var("SHORTS_FRAME_RATE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            },
            fetch_timeout: Duration::from_secs(
                std::env::var("SHORTS_FETCH_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(20),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.scene_count, 7);
        assert_eq!(config.render.frame_rate, 30);
        assert!((config.margin_seconds - 1.5).abs() < f64::EPSILON);
        assert!((config.default_duration_seconds - 30.0).abs() < f64::EPSILON);
    }
}
