//! Sequential scene asset acquisition.
//!
//! Acquires one image per scene, strictly in order, through a bounded-retry
//! fetch that substitutes a deterministic placeholder on exhaustion. The
//! pipeline never fails because a single asset could not be fetched; the
//! only error it surfaces is caller-initiated cancellation.

pub mod config;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod progress;
pub mod request;
pub mod retry;

pub use config::AcquireConfig;
pub use error::{AcquireError, AcquireResult};
pub use fetch::{HttpImageFetcher, ImageFetcher};
pub use pipeline::acquire_all;
pub use progress::{channel, noop_sender, AcquireProgress, ProgressReceiver, ProgressSender};
pub use request::{RandomSeedSource, SceneRequest, SeedSource, SequentialSeedSource};
pub use retry::fetch_with_retry;
