// SPDX-License-Identifier: MPL-2.0
//! Test utilities: a recording host-surface double and float assertion
//! helpers.
//!
//! `RecordingSurface` implements [`HostSurface`] without any rendering:
//! it logs every interaction with a timestamp from the Tokio clock, so
//! paused-clock tests can assert exact presentation timings.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::stream::BoxStream;
use tokio::sync::broadcast;
use tokio::time::Instant;

use crate::render::RenderTree;
use crate::surface::{
    filtered_swipes, AnimationEffect, AttachmentId, HostSurface, Placement, SwipeDirection,
};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// One recorded host-surface interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCall {
    Attach(AttachmentId),
    AnimationStarted(AttachmentId, AnimationEffect),
    AnimationFinished(AttachmentId, AnimationEffect),
    Detach(AttachmentId),
}

/// A [`HostSurface`] double that records calls instead of rendering.
#[derive(Debug)]
pub struct RecordingSurface {
    available: AtomicBool,
    calls: Arc<Mutex<Vec<(Instant, SurfaceCall)>>>,
    attached: Mutex<Vec<AttachmentId>>,
    peak_attached: AtomicUsize,
    swipe_tx: broadcast::Sender<(AttachmentId, SwipeDirection)>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        let (swipe_tx, _) = broadcast::channel(16);
        Self {
            available: AtomicBool::new(true),
            calls: Arc::new(Mutex::new(Vec::new())),
            attached: Mutex::new(Vec::new()),
            peak_attached: AtomicUsize::new(0),
            swipe_tx,
        }
    }

    /// A surface that refuses every attach, as if no window existed.
    #[must_use]
    pub fn unavailable() -> Self {
        let surface = Self::new();
        surface.set_available(false);
        surface
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Release);
    }

    /// Everything recorded so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<(Instant, SurfaceCall)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of attachments currently on the surface.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.lock_attached().len()
    }

    /// Highest number of simultaneous attachments ever observed.
    #[must_use]
    pub fn peak_attached(&self) -> usize {
        self.peak_attached.load(Ordering::Acquire)
    }

    /// The most recent attachment still on the surface.
    #[must_use]
    pub fn current_attachment(&self) -> Option<AttachmentId> {
        self.lock_attached().last().copied()
    }

    /// Injects a swipe gesture on a specific attachment.
    pub fn swipe(&self, id: AttachmentId, direction: SwipeDirection) {
        let _ = self.swipe_tx.send((id, direction));
    }

    /// Injects a swipe gesture on whatever is currently attached.
    ///
    /// # Panics
    ///
    /// Panics when nothing is attached.
    pub fn swipe_current(&self, direction: SwipeDirection) {
        let id = self
            .current_attachment()
            .expect("no attachment to swipe on");
        self.swipe(id, direction);
    }

    fn record(&self, call: SurfaceCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((Instant::now(), call));
    }

    fn lock_attached(&self) -> std::sync::MutexGuard<'_, Vec<AttachmentId>> {
        self.attached.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSurface for RecordingSurface {
    fn attach(&self, _content: RenderTree, _placement: Placement) -> Option<AttachmentId> {
        if !self.available.load(Ordering::Acquire) {
            return None;
        }
        let id = AttachmentId::next();
        {
            let mut attached = self.lock_attached();
            attached.push(id);
            self.peak_attached
                .fetch_max(attached.len(), Ordering::AcqRel);
        }
        self.record(SurfaceCall::Attach(id));
        Some(id)
    }

    fn detach(&self, id: AttachmentId) {
        self.lock_attached().retain(|attached| *attached != id);
        self.record(SurfaceCall::Detach(id));
    }

    fn animate(
        &self,
        id: AttachmentId,
        effect: AnimationEffect,
        duration: Duration,
    ) -> BoxFuture<'static, ()> {
        self.record(SurfaceCall::AnimationStarted(id, effect));
        let calls = Arc::clone(&self.calls);
        Box::pin(async move {
            tokio::time::sleep(duration).await;
            calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((Instant::now(), SurfaceCall::AnimationFinished(id, effect)));
        })
    }

    fn swipes(&self, id: AttachmentId) -> BoxStream<'static, SwipeDirection> {
        filtered_swipes(self.swipe_tx.subscribe(), id)
    }
}
