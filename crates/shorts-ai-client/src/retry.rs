//! Shared retry helper for collaborator requests.

use std::time::Duration;

use tracing::warn;

use crate::error::{AiError, AiResult};

/// Execute an async operation with retry on retryable failures.
///
/// Exponential backoff starting at 500 ms, doubling per attempt. Errors
/// classified non-retryable propagate immediately.
pub async fn with_retry<T, F, Fut>(max_retries: u32, operation: &str, op: F) -> AiResult<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = AiResult<T>>,
{
    let mut last_error = None;

    for attempt in 0..=max_retries {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < max_retries => {
                let delay = Duration::from_millis(500 * 2u64.pow(attempt));
                warn!(
                    operation = %operation,
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    "Collaborator request failed, retrying: {}",
                    e
                );
                tokio::time::sleep(delay).await;
                last_error = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_error.unwrap_or_else(|| AiError::request_failed("Unknown error")))
}
