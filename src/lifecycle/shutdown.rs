//! Shutdown coordination.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

/// Process exit status for every termination path.
pub const EXIT_STATUS: i32 = 1;

/// The events that end the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationEvent {
    /// Operator-initiated stop (SIGTERM, ctrl-c).
    ShutdownRequested,
    /// A panic escaped somewhere in the process.
    UnhandledError,
    /// A spawned background task ended abnormally instead of running to
    /// completion.
    FailedTask,
}

/// Cloneable trigger half of the termination channel.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: mpsc::UnboundedSender<TerminationEvent>,
    fired: Arc<AtomicBool>,
}

impl ShutdownHandle {
    /// Raise a termination event. The first call wins and starts the drain;
    /// later calls are no-ops so the drain sequence runs exactly once.
    ///
    /// Returns whether this call was the one that triggered the drain.
    pub fn raise(&self, event: TerminationEvent) -> bool {
        if self
            .fired
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!(event = ?event, "Drain already in progress, trigger ignored");
            return false;
        }
        let _ = self.tx.send(event);
        true
    }

    /// Whether a drain has been triggered.
    pub fn is_draining(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

/// Receiving half of the termination channel; owned by the server lifecycle.
#[derive(Debug)]
pub struct ShutdownController {
    rx: mpsc::UnboundedReceiver<TerminationEvent>,
    handle: ShutdownHandle,
}

impl ShutdownController {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = ShutdownHandle {
            tx,
            fired: Arc::new(AtomicBool::new(false)),
        };
        Self { rx, handle }
    }

    /// Get a trigger handle for signals, middleware, and task monitors.
    pub fn handle(&self) -> ShutdownHandle {
        self.handle.clone()
    }

    /// Resolve with the first termination event.
    ///
    /// If every handle is dropped without firing, treat it as a requested
    /// shutdown rather than hanging forever.
    pub async fn triggered(mut self) -> TerminationEvent {
        self.rx
            .recv()
            .await
            .unwrap_or(TerminationEvent::ShutdownRequested)
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a background task whose abnormal end raises [`TerminationEvent::FailedTask`].
///
/// "Abnormal" is a panic or cancellation; running to completion is fine.
pub fn spawn_monitored<F>(handle: ShutdownHandle, name: &'static str, task: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let worker = tokio::spawn(task);
    tokio::spawn(async move {
        if let Err(err) = worker.await {
            tracing::error!(task = name, error = %err, "Background task ended abnormally");
            handle.raise(TerminationEvent::FailedTask);
        }
    });
}
