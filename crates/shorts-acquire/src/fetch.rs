//! Resource fetch abstraction.
//!
//! The pipeline depends only on a success/failure signal for a URL; it
//! never inspects payload bytes. The hosting environment supplies the real
//! implementation, and tests substitute deterministic fakes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::AcquireResult;

/// Probe for whether a resource loads successfully.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Attempt to load `url`; true means the resource resolved.
    async fn fetch(&self, url: &str) -> bool;
}

/// HTTP-backed fetcher.
///
/// Success is a 2xx status; the body is not read.
pub struct HttpImageFetcher {
    http: Client,
}

impl HttpImageFetcher {
    /// Create a fetcher with the given per-request timeout.
    pub fn new(timeout: Duration) -> AcquireResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> bool {
        match self.http.get(url).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                if !ok {
                    debug!(url = %url, status = %response.status(), "Image probe returned non-success");
                }
                ok
            }
            Err(e) => {
                debug!(url = %url, error = %e, "Image probe failed");
                false
            }
        }
    }
}
