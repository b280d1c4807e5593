//! Per-scene request construction.
//!
//! Each scene request combines the prompt with a fixed rendering-style
//! suffix and a freshly drawn disambiguation seed, so duplicate prompts
//! still yield visually distinct assets. Seeds come through an explicit
//! source rather than hidden global randomness, so acquisition is
//! reproducible under test.

use rand::Rng;

use shorts_models::ScenePrompt;

use crate::config::AcquireConfig;

/// Rendering-style suffix appended to every scene prompt.
pub const STYLE_SUFFIX: &str = ", cinematic lighting, 4k, vertical";

/// Upper bound (exclusive) for drawn disambiguation seeds.
const SEED_SPACE: u64 = 100_000;

/// Source of per-scene disambiguation seeds.
pub trait SeedSource: Send {
    /// Draw the seed for the next scene request.
    fn next_seed(&mut self) -> u64;
}

/// Production seed source backed by the thread RNG.
#[derive(Debug, Default)]
pub struct RandomSeedSource;

impl SeedSource for RandomSeedSource {
    fn next_seed(&mut self) -> u64 {
        rand::rng().random_range(0..SEED_SPACE)
    }
}

/// Deterministic seed source for tests: `base`, `base + 1`, ...
#[derive(Debug)]
pub struct SequentialSeedSource {
    next: u64,
}

impl SequentialSeedSource {
    /// Start the sequence at `base`.
    pub fn new(base: u64) -> Self {
        Self { next: base }
    }
}

impl SeedSource for SequentialSeedSource {
    fn next_seed(&mut self) -> u64 {
        let seed = self.next;
        self.next += 1;
        seed
    }
}

/// One scene's derived acquisition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneRequest {
    /// The prompt the request was derived from.
    pub prompt: ScenePrompt,
    /// Full image service URL, seed included.
    pub url: String,
    /// The disambiguation seed; also keys the placeholder fallback.
    pub seed: u64,
}

/// Build the image service request for one scene.
pub fn build_scene_request(prompt: &ScenePrompt, seed: u64, config: &AcquireConfig) -> SceneRequest {
    let styled = format!("{}{}", prompt.as_str(), STYLE_SUFFIX);
    let url = format!(
        "{}/prompt/{}?width={}&height={}&nologo=true&model=flux&seed={}",
        config.image_base_url,
        urlencoding::encode(&styled),
        config.image_width,
        config.image_height,
        seed,
    );

    SceneRequest {
        prompt: prompt.clone(),
        url,
        seed,
    }
}

/// Deterministic placeholder for a request whose retry budget ran out.
///
/// Keyed by the request's seed so a reproducible run substitutes the same
/// generic image.
pub fn placeholder_url(seed: u64, config: &AcquireConfig) -> String {
    format!(
        "https://picsum.photos/seed/fallback_{}/{}/{}",
        seed, config.image_width, config.image_height
    )
}
