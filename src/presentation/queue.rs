// SPDX-License-Identifier: MPL-2.0
//! The serial presentation scheduler.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::task::PresentationTask;

/// Runs presentation tasks one at a time, in submission order.
///
/// The worker awaits each task to completion before receiving the next,
/// so at most one task is ever executing — the queue is the sole
/// gatekeeper of the host surface. Tasks waiting in the channel keep
/// their submission order and are never started early.
#[derive(Debug)]
pub struct PresentationQueue {
    submit_tx: mpsc::UnboundedSender<PresentationTask>,
    _worker: JoinHandle<()>,
}

impl PresentationQueue {
    /// Spawns the worker on the current Tokio runtime.
    pub(crate) fn spawn() -> Self {
        let (submit_tx, mut submit_rx) = mpsc::unbounded_channel::<PresentationTask>();
        let worker = tokio::spawn(async move {
            while let Some(task) = submit_rx.recv().await {
                let completion = task.completion();
                task.run().await;
                debug_assert!(completion.is_finished(), "task returned without completing");
            }
        });
        Self {
            submit_tx,
            _worker: worker,
        }
    }

    /// Appends a task to the queue. Cannot fail under normal operation;
    /// a submission after the worker has gone away is silently dropped.
    pub(crate) fn submit(&self, task: PresentationTask) {
        let _ = self.submit_tx.send(task);
    }
}
