// SPDX-License-Identifier: MPL-2.0
//! A presentation task: one toast's full show/hide lifecycle.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::BoxStream;
use futures_util::{future, StreamExt};
use tokio::sync::watch;

use super::manager::ActiveSlot;
use super::request::ToastRequest;
use crate::config::ToastConfig;
use crate::diagnostics::{DiagnosticsHandle, ToastEventKind};
use crate::surface::{AnimationEffect, AttachmentId, HostSurface, SwipeDirection};

/// Unique identifier for a presentation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a new unique task ID.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Lifecycle states of a presentation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Accepted but not yet started by the queue.
    Created,
    /// Attached (or attempting to attach) and visible.
    Executing,
    /// Running its exit animation.
    Dismissing,
    /// Detached; terminal.
    Finished,
}

impl TaskState {
    /// Whether `from → to` is a legal lifecycle transition.
    fn can_transition(from: TaskState, to: TaskState) -> bool {
        matches!(
            (from, to),
            (TaskState::Created, TaskState::Executing)
                | (TaskState::Executing, TaskState::Dismissing)
                | (TaskState::Executing, TaskState::Finished)
                | (TaskState::Dismissing, TaskState::Finished)
        )
    }
}

/// Latch guaranteeing completion side effects run exactly once.
#[derive(Debug, Clone, Default)]
pub(crate) struct CompletionLatch(Arc<AtomicBool>);

impl CompletionLatch {
    /// Latches completion. Returns `true` only for the first caller.
    pub(crate) fn latch(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Why a toast left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DismissReason {
    Expired,
    Swiped,
    Requested,
}

/// Animation durations a task uses, resolved from configuration.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AnimationTimings {
    pub fade_in: Duration,
    pub fade_out: Duration,
    pub slide_out: Duration,
}

impl AnimationTimings {
    pub(crate) fn from_config(config: &ToastConfig) -> Self {
        Self {
            fade_in: config.fade_in(),
            fade_out: config.fade_out(),
            slide_out: config.slide_out(),
        }
    }
}

/// One toast's end-to-end lifecycle: attach, animate in, wait, animate
/// out, detach.
///
/// The wait phase ends on the first of: the display duration elapsing,
/// an upward swipe on the attachment, or an external dismiss signal.
/// Completion is latched so a task can never detach twice or release its
/// queue slot twice.
pub(crate) struct PresentationTask {
    id: TaskId,
    request: ToastRequest,
    state: TaskState,
    attachment: Option<AttachmentId>,
    completion: CompletionLatch,
    timings: AnimationTimings,
    surface: Arc<dyn HostSurface>,
    active: ActiveSlot,
    dismiss_tx: watch::Sender<bool>,
    dismiss_rx: watch::Receiver<bool>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl PresentationTask {
    pub(crate) fn new(
        request: ToastRequest,
        timings: AnimationTimings,
        surface: Arc<dyn HostSurface>,
        active: ActiveSlot,
        diagnostics: Option<DiagnosticsHandle>,
    ) -> Self {
        let (dismiss_tx, dismiss_rx) = watch::channel(false);
        Self {
            id: TaskId::next(),
            request,
            state: TaskState::Created,
            attachment: None,
            completion: CompletionLatch::default(),
            timings,
            surface,
            active,
            dismiss_tx,
            dismiss_rx,
            diagnostics,
        }
    }

    /// Shared handle to this task's completion latch.
    pub(crate) fn completion(&self) -> CompletionLatch {
        self.completion.clone()
    }

    /// Runs the task to completion. Never fails: a missing host surface
    /// skips the presentation but still latches completion so the queue
    /// advances.
    pub(crate) async fn run(mut self) {
        self.transition(TaskState::Executing);

        let tree = self.request.content().render();
        let placement = self.request.placement();
        let Some(attachment) = self.surface.attach(tree, placement) else {
            self.log(ToastEventKind::SkippedNoSurface { task: self.id });
            self.finish();
            return;
        };
        self.attachment = Some(attachment);
        self.active.set(self.id, self.dismiss_tx.clone());

        // Subscribe before the entrance animation so gestures recognized
        // during fade-in are not lost.
        let mut swipes = self.surface.swipes(attachment);
        self.surface
            .animate(attachment, AnimationEffect::Fade { to: 1.0 }, self.timings.fade_in)
            .await;
        self.log(ToastEventKind::Presented { task: self.id });

        let duration = self.request.duration();
        let reason = tokio::select! {
            () = tokio::time::sleep(duration) => DismissReason::Expired,
            () = swipe_up(&mut swipes) => DismissReason::Swiped,
            _ = self.dismiss_rx.changed() => DismissReason::Requested,
        };
        drop(swipes);

        self.transition(TaskState::Dismissing);
        let (effect, length) = match reason {
            DismissReason::Expired | DismissReason::Requested => {
                (AnimationEffect::Fade { to: 0.0 }, self.timings.fade_out)
            }
            DismissReason::Swiped => (AnimationEffect::SlideOff, self.timings.slide_out),
        };
        self.surface.animate(attachment, effect, length).await;

        self.log(match reason {
            DismissReason::Expired => ToastEventKind::AutoDismissed { task: self.id },
            DismissReason::Swiped => ToastEventKind::SwipeDismissed { task: self.id },
            DismissReason::Requested => ToastEventKind::DismissRequested { task: self.id },
        });
        self.finish();
    }

    /// Detaches the content and releases the queue slot. Idempotent: only
    /// the first call has any effect.
    fn finish(&mut self) {
        if !self.completion.latch() {
            return;
        }
        if let Some(attachment) = self.attachment.take() {
            self.surface.detach(attachment);
        }
        self.active.clear(self.id);
        self.state = TaskState::Finished;
    }

    fn transition(&mut self, next: TaskState) {
        debug_assert!(
            TaskState::can_transition(self.state, next),
            "illegal task transition {:?} -> {:?}",
            self.state,
            next
        );
        self.state = next;
    }

    fn log(&self, kind: ToastEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

/// Resolves when an upward swipe arrives; other directions are ignored.
/// Pends forever if the stream ends, leaving the outcome to the timer or
/// the dismiss signal.
async fn swipe_up(swipes: &mut BoxStream<'static, SwipeDirection>) {
    while let Some(direction) = swipes.next().await {
        if direction == SwipeDirection::Up {
            return;
        }
    }
    future::pending::<()>().await
}
