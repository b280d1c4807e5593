//! Bounded retry with deterministic placeholder fallback.

use std::time::Duration;

use tokio::sync::watch;
use tracing::warn;

use shorts_models::SceneAsset;

use crate::config::AcquireConfig;
use crate::error::{AcquireError, AcquireResult};
use crate::fetch::ImageFetcher;
use crate::request::{placeholder_url, SceneRequest};

/// Fetch one scene asset with bounded retries and fixed backoff.
///
/// Always resolves to an asset for fetch failures: after `max_attempts`
/// consecutive misses the deterministic placeholder derived from the
/// request's seed is substituted, so the pipeline never fails because one
/// scene could not be fetched. The only error path is caller-initiated
/// cancellation, observed between attempts and during the backoff wait.
pub async fn fetch_with_retry(
    fetcher: &dyn ImageFetcher,
    request: &SceneRequest,
    config: &AcquireConfig,
    cancel: &mut watch::Receiver<bool>,
) -> AcquireResult<SceneAsset> {
    for attempt in 1..=config.max_attempts {
        if *cancel.borrow() {
            return Err(AcquireError::Cancelled);
        }

        if fetcher.fetch(&request.url).await {
            return Ok(SceneAsset::confirmed(request.url.clone()));
        }

        warn!(
            seed = request.seed,
            attempt,
            max_attempts = config.max_attempts,
            "Scene asset fetch failed"
        );

        if attempt < config.max_attempts {
            sleep_or_cancel(config.backoff, cancel).await?;
        }
    }

    let fallback = placeholder_url(request.seed, config);
    warn!(
        seed = request.seed,
        fallback = %fallback,
        "Retry budget exhausted, substituting placeholder asset"
    );
    Ok(SceneAsset::fallback(fallback))
}

/// Sleep for `duration`, waking early with `Cancelled` if the watch flag
/// flips.
pub(crate) async fn sleep_or_cancel(
    duration: Duration,
    cancel: &mut watch::Receiver<bool>,
) -> AcquireResult<()> {
    let sleep = tokio::time::sleep(duration);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            _ = &mut sleep => return Ok(()),
            changed = cancel.changed() => match changed {
                Ok(()) if *cancel.borrow() => return Err(AcquireError::Cancelled),
                Ok(()) => continue,
                // Sender dropped: cancellation can no longer arrive.
                Err(_) => {
                    (&mut sleep).await;
                    return Ok(());
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;
    use tokio::time::Instant;

    use shorts_models::ScenePrompt;

    use crate::request::build_scene_request;

    /// Fails the first `failures` fetches, then succeeds.
    struct FlakyFetcher {
        failures: u32,
        calls: AtomicU32,
    }

    impl FlakyFetcher {
        fn new(failures: u32) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
            }
        }

        fn call_count(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ImageFetcher for FlakyFetcher {
        async fn fetch(&self, _url: &str) -> bool {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            call >= self.failures
        }
    }

    fn test_config() -> AcquireConfig {
        AcquireConfig {
            backoff: Duration::from_millis(1500),
            ..AcquireConfig::default()
        }
    }

    fn live_cancel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
        watch::channel(false)
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success() {
        let fetcher = FlakyFetcher::new(0);
        let config = test_config();
        let request = build_scene_request(&ScenePrompt::new("a forest"), 1, &config);
        let (_tx, mut cancel) = live_cancel();

        let asset = fetch_with_retry(&fetcher, &request, &config, &mut cancel)
            .await
            .unwrap();

        assert_eq!(asset.url, request.url);
        assert!(!asset.placeholder);
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_transient_failures() {
        let fetcher = FlakyFetcher::new(2);
        let config = test_config();
        let request = build_scene_request(&ScenePrompt::new("a forest"), 2, &config);
        let (_tx, mut cancel) = live_cancel();

        let asset = fetch_with_retry(&fetcher, &request, &config, &mut cancel)
            .await
            .unwrap();

        assert!(!asset.placeholder);
        assert_eq!(fetcher.call_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_resolves_to_placeholder() {
        let fetcher = FlakyFetcher::new(u32::MAX);
        let config = test_config();
        let request = build_scene_request(&ScenePrompt::new("a forest"), 99, &config);
        let (_tx, mut cancel) = live_cancel();

        let start = Instant::now();
        let asset = fetch_with_retry(&fetcher, &request, &config, &mut cancel)
            .await
            .unwrap();
        let elapsed = start.elapsed();

        assert!(asset.placeholder);
        assert_eq!(asset.url, placeholder_url(99, &config));
        assert_eq!(fetcher.call_count(), config.max_attempts);

        // Backoff runs between attempts only: (max_attempts - 1) waits.
        let expected = config.backoff * (config.max_attempts - 1);
        assert!(elapsed >= expected);
        assert!(elapsed < expected + Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_during_backoff() {
        let fetcher = FlakyFetcher::new(u32::MAX);
        let config = test_config();
        let request = build_scene_request(&ScenePrompt::new("a forest"), 5, &config);
        let (tx, mut cancel) = live_cancel();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let _ = tx.send(true);
        });

        let result = fetch_with_retry(&fetcher, &request, &config, &mut cancel).await;
        assert!(matches!(result, Err(AcquireError::Cancelled)));
        // Cancelled inside the first backoff window.
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_checked_before_first_attempt() {
        let fetcher = FlakyFetcher::new(0);
        let config = test_config();
        let request = build_scene_request(&ScenePrompt::new("a forest"), 5, &config);
        let (tx, mut cancel) = live_cancel();
        tx.send(true).unwrap();

        let result = fetch_with_retry(&fetcher, &request, &config, &mut cancel).await;
        assert!(matches!(result, Err(AcquireError::Cancelled)));
        assert_eq!(fetcher.call_count(), 0);
    }
}
