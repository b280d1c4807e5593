//! Scene prompt list normalization.
//!
//! Downstream scene timing always assumes a fixed scene count; this module
//! isolates the rest of the pipeline from a script generator that returned
//! fewer or more prompts than expected.

use rand::Rng;

/// Generic descriptors used to seed an empty prompt list.
pub const GENERIC_PROMPTS: [&str; 2] = ["Abstract technology background", "Futuristic landscape"];

/// Normalize `prompts` to exactly `target` elements.
///
/// - An empty list is seeded with the generic descriptors first.
/// - A short list is padded by appending a uniformly random existing
///   element, re-drawn on every iteration (with replacement), so later
///   padding can duplicate earlier padding.
/// - A long list is truncated to its first `target` elements.
///
/// Duplicated prompts still yield visually distinct assets downstream
/// because each scene request carries a fresh disambiguation seed.
pub fn normalize_prompts<R: Rng + ?Sized>(
    prompts: Vec<String>,
    target: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut prompts = prompts;

    if prompts.is_empty() {
        prompts.extend(GENERIC_PROMPTS.iter().map(|p| p.to_string()));
    }

    while prompts.len() < target {
        let pick = rng.random_range(0..prompts.len());
        prompts.push(prompts[pick].clone());
    }

    prompts.truncate(target);
    prompts
}
