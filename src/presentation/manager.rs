// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastManager` accepts presentation requests, serializes them
//! through the presentation queue, and exposes the immediate-dismiss
//! path for whatever is currently visible.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;

use super::queue::PresentationQueue;
use super::request::ToastRequest;
use super::task::{AnimationTimings, PresentationTask, TaskId};
use crate::config::ToastConfig;
use crate::diagnostics::DiagnosticsHandle;
use crate::render::MessageToast;
use crate::surface::HostSurface;

/// Tracks the toast currently attached to the surface.
///
/// Set by a task when it attaches, cleared by the same task when it
/// finishes. Only the immediate-dismiss path reads it.
#[derive(Clone, Debug, Default)]
pub(crate) struct ActiveSlot {
    inner: Arc<Mutex<Option<ActiveToast>>>,
}

#[derive(Debug)]
struct ActiveToast {
    task: TaskId,
    dismiss: watch::Sender<bool>,
}

impl ActiveSlot {
    pub(crate) fn set(&self, task: TaskId, dismiss: watch::Sender<bool>) {
        let mut slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(ActiveToast { task, dismiss });
    }

    /// Clears the slot, but only if it still belongs to `task` — a
    /// successor may already have taken it over.
    pub(crate) fn clear(&self, task: TaskId) {
        let mut slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.as_ref().is_some_and(|active| active.task == task) {
            *slot = None;
        }
    }

    /// Signals the visible toast to dismiss. Returns whether anything
    /// was visible.
    pub(crate) fn dismiss_current(&self) -> bool {
        let slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(active) => {
                let _ = active.dismiss.send(true);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn current_task(&self) -> Option<TaskId> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|active| active.task)
    }
}

/// Presents toasts over a host surface, one at a time.
///
/// An explicitly constructed service: create one at your composition
/// root and pass it to whoever needs to show toasts. Construction
/// spawns the queue worker, so the manager must be created inside a
/// Tokio runtime. All operations are fire-and-forget; nothing here
/// returns an error to the caller.
///
/// ```no_run
/// use std::sync::Arc;
/// use toastline::ui::IcedSurface;
/// use toastline::{MessageToast, ToastManager, ToastRequest};
///
/// # async fn demo() {
/// let surface = Arc::new(IcedSurface::new());
/// let manager = ToastManager::new(surface);
///
/// manager.present(ToastRequest::new(MessageToast::new("Image saved")));
/// manager.present_simple("Done");
/// # }
/// ```
pub struct ToastManager {
    surface: Arc<dyn HostSurface>,
    config: ToastConfig,
    queue: PresentationQueue,
    active: ActiveSlot,
    diagnostics: Option<DiagnosticsHandle>,
}

impl ToastManager {
    /// Creates a manager with the default configuration.
    #[must_use]
    pub fn new(surface: Arc<dyn HostSurface>) -> Self {
        Self::with_config(surface, ToastConfig::default())
    }

    /// Creates a manager with explicit configuration.
    #[must_use]
    pub fn with_config(surface: Arc<dyn HostSurface>, config: ToastConfig) -> Self {
        Self {
            surface,
            config,
            queue: PresentationQueue::spawn(),
            active: ActiveSlot::default(),
            diagnostics: None,
        }
    }

    /// Installs a diagnostics handle; presentation lifecycle events are
    /// recorded through it from then on.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Schedules a toast for presentation.
    ///
    /// Returns immediately; the toast becomes visible once every
    /// previously submitted toast has fully left the surface.
    pub fn present(&self, request: ToastRequest) {
        let task = PresentationTask::new(
            request,
            AnimationTimings::from_config(&self.config),
            Arc::clone(&self.surface),
            self.active.clone(),
            self.diagnostics.clone(),
        );
        self.queue.submit(task);
    }

    /// Presents a default-styled message toast using the configured
    /// simple duration and placement.
    pub fn present_simple(&self, message: impl Into<String>) {
        let request = ToastRequest::new(MessageToast::new(message))
            .with_duration(self.config.simple_duration())
            .with_anchor(self.config.default_anchor)
            .with_padding(self.config.default_padding);
        self.present(request);
    }

    /// Immediately fades out the visible toast, independent of the
    /// queue. Returns whether anything was visible. Toasts still waiting
    /// in the queue are unaffected and will present afterwards.
    pub fn dismiss(&self) -> bool {
        self.active.dismiss_current()
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_reports_nothing_to_dismiss() {
        let slot = ActiveSlot::default();
        assert!(!slot.dismiss_current());
    }

    #[test]
    fn occupied_slot_signals_its_task() {
        let slot = ActiveSlot::default();
        let (tx, rx) = watch::channel(false);
        let task = TaskId::next();

        slot.set(task, tx);
        assert!(slot.dismiss_current());
        assert!(*rx.borrow());
    }

    #[test]
    fn clear_ignores_a_stale_task() {
        let slot = ActiveSlot::default();
        let (tx_old, _rx_old) = watch::channel(false);
        let (tx_new, _rx_new) = watch::channel(false);
        let old = TaskId::next();
        let new = TaskId::next();

        slot.set(old, tx_old);
        slot.set(new, tx_new);
        slot.clear(old);

        assert_eq!(slot.current_task(), Some(new));
        slot.clear(new);
        assert_eq!(slot.current_task(), None);
    }

    #[tokio::test]
    async fn dismiss_with_nothing_visible_is_a_noop() {
        let surface = Arc::new(crate::test_utils::RecordingSurface::new());
        let manager = ToastManager::new(Arc::clone(&surface) as Arc<dyn HostSurface>);

        assert!(!manager.dismiss());
        assert!(surface.calls().is_empty());
    }
}
