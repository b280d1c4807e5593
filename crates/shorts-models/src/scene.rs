//! Scene prompts and acquired scene assets.

use serde::{Deserialize, Serialize};

/// Visual descriptor for one scene image.
///
/// Produced by the script generator; describes a physical scene for the
/// image service. The normalizer may synthesize extra prompts to pad a
/// short list, so duplicates are expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenePrompt(pub String);

impl ScenePrompt {
    /// Create a new scene prompt.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The prompt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ScenePrompt {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for ScenePrompt {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl std::fmt::Display for ScenePrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved reference to one acquired scene image.
///
/// Assigned once acquisition for the scene resolves; never partially
/// overwritten. When the real asset could not be fetched within the retry
/// budget, `placeholder` is true and `url` points at the deterministic
/// fallback image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneAsset {
    /// URL (or equivalent handle) of the confirmed image.
    pub url: String,
    /// Whether this is the deterministic fallback rather than the
    /// requested image.
    pub placeholder: bool,
}

impl SceneAsset {
    /// An asset confirmed from the requested source.
    pub fn confirmed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            placeholder: false,
        }
    }

    /// A deterministic fallback asset.
    pub fn fallback(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            placeholder: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_prompt_display() {
        let prompt = ScenePrompt::new("a cyberpunk city skyline at night");
        assert_eq!(prompt.to_string(), "a cyberpunk city skyline at night");
    }

    #[test]
    fn test_scene_asset_constructors() {
        let confirmed = SceneAsset::confirmed("https://example.com/a.jpg");
        assert!(!confirmed.placeholder);

        let fallback = SceneAsset::fallback("https://example.com/fallback.jpg");
        assert!(fallback.placeholder);
    }
}
