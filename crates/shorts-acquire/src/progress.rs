//! Progress reporting for the acquisition pipeline.
//!
//! Callback-free, channel-based progress so the pipeline stays decoupled
//! from whatever surfaces the updates (CLI logging, a UI, tests).

use tokio::sync::mpsc;

/// Progress event emitted during scene acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireProgress {
    /// Acquisition for one scene is about to start ("scene i of N").
    SceneStarted { index: usize, total: usize },

    /// One scene resolved, possibly to the placeholder.
    SceneAcquired { index: usize, placeholder: bool },

    /// All scenes resolved.
    Complete,
}

/// Sender half of the progress channel.
///
/// Sends are non-blocking; events are dropped if the receiver lags. The
/// pipeline must never stall on its observer.
#[derive(Clone)]
pub struct ProgressSender {
    tx: mpsc::Sender<AcquireProgress>,
}

impl ProgressSender {
    /// Send a progress event (non-blocking).
    pub fn send(&self, event: AcquireProgress) {
        let _ = self.tx.try_send(event);
    }

    /// Announce that acquisition for scene `index` is starting.
    pub fn scene_started(&self, index: usize, total: usize) {
        self.send(AcquireProgress::SceneStarted { index, total });
    }

    /// Announce that scene `index` resolved.
    pub fn scene_acquired(&self, index: usize, placeholder: bool) {
        self.send(AcquireProgress::SceneAcquired { index, placeholder });
    }

    /// Announce pipeline completion.
    pub fn complete(&self) {
        self.send(AcquireProgress::Complete);
    }
}

/// Receiver half of the progress channel.
pub struct ProgressReceiver {
    rx: mpsc::Receiver<AcquireProgress>,
}

impl ProgressReceiver {
    /// Receive the next progress event.
    pub async fn recv(&mut self) -> Option<AcquireProgress> {
        self.rx.recv().await
    }

    /// Try to receive a progress event without blocking.
    pub fn try_recv(&mut self) -> Option<AcquireProgress> {
        self.rx.try_recv().ok()
    }
}

/// Create a progress channel pair.
pub fn channel() -> (ProgressSender, ProgressReceiver) {
    let (tx, rx) = mpsc::channel(32);
    (ProgressSender { tx }, ProgressReceiver { rx })
}

/// A progress sender whose events go nowhere.
pub fn noop_sender() -> ProgressSender {
    let (tx, _rx) = mpsc::channel(1);
    ProgressSender { tx }
}
