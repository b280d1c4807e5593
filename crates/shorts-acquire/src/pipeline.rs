//! Strictly sequential scene acquisition.
//!
//! One fetch in flight at a time: the request for scene i+1 is not even
//! built until scene i has resolved, and a fixed pause separates
//! consecutive scenes. Both properties exist to respect the image
//! provider's implicit rate limit and to keep progress reporting ordered.

use tokio::sync::watch;
use tracing::info;

use shorts_models::{SceneAsset, ScenePrompt};

use crate::config::AcquireConfig;
use crate::error::{AcquireError, AcquireResult};
use crate::fetch::ImageFetcher;
use crate::progress::ProgressSender;
use crate::request::{build_scene_request, SeedSource};
use crate::retry::{fetch_with_retry, sleep_or_cancel};

/// Acquire one asset per prompt, in order.
///
/// The returned list has the same length and order as `prompts`. Single
/// scene failures never abort the pipeline (the retry layer substitutes a
/// placeholder); the only error is caller-initiated cancellation.
pub async fn acquire_all(
    fetcher: &dyn ImageFetcher,
    prompts: &[ScenePrompt],
    config: &AcquireConfig,
    seeds: &mut dyn SeedSource,
    progress: &ProgressSender,
    cancel: &mut watch::Receiver<bool>,
) -> AcquireResult<Vec<SceneAsset>> {
    let total = prompts.len();
    let mut assets = Vec::with_capacity(total);

    for (index, prompt) in prompts.iter().enumerate() {
        if *cancel.borrow() {
            return Err(AcquireError::Cancelled);
        }

        progress.scene_started(index, total);
        info!(scene = index + 1, total, "Acquiring scene asset");

        let request = build_scene_request(prompt, seeds.next_seed(), config);
        let asset = fetch_with_retry(fetcher, &request, config, cancel).await?;

        progress.scene_acquired(index, asset.placeholder);
        assets.push(asset);

        if index + 1 < total {
            sleep_or_cancel(config.scene_pause, cancel).await?;
        }
    }

    progress.complete();
    Ok(assets)
}
