// SPDX-License-Identifier: MPL-2.0
//! Iced-backed host surface.
//!
//! `IcedSurface` holds the currently attached toast in shared state that
//! the application's `view` reads every frame through
//! [`IcedSurface::frame`]. Animations are time-based: `animate` installs
//! an animation descriptor and resolves after its duration on the Tokio
//! clock, while rendering interpolates progress from wall time — no
//! per-frame bookkeeping is needed beyond redrawing (e.g. an
//! `iced::time::every` subscription while a toast is visible).
//!
//! Swipe gestures are fed in by the application from its event loop (see
//! [`SwipeTracker`](super::SwipeTracker)) through
//! [`IcedSurface::report_swipe`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use futures_util::future::BoxFuture;
use futures_util::stream::BoxStream;
use tokio::sync::broadcast;

use crate::render::RenderTree;
use crate::surface::{
    filtered_swipes, AnimationEffect, AttachmentId, HostSurface, Placement, SwipeDirection,
};

/// How far a swiped toast travels toward the anchored edge, in logical
/// pixels.
const SLIDE_DISTANCE: f32 = 96.0;

/// Capacity of the swipe gesture broadcast.
const SWIPE_CHANNEL_CAPACITY: usize = 16;

/// One animation in flight on the attached content.
#[derive(Debug, Clone, Copy)]
struct ActiveAnimation {
    effect: AnimationEffect,
    started: Instant,
    duration: Duration,
}

impl ActiveAnimation {
    /// Linear progress in `[0, 1]` at `now`.
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Content currently attached to the surface.
#[derive(Debug, Clone)]
struct Attached {
    id: AttachmentId,
    tree: RenderTree,
    placement: Placement,
    /// Settled opacity: the baseline the current animation starts from.
    opacity: f32,
    animation: Option<ActiveAnimation>,
}

impl Attached {
    fn current_opacity(&self, now: Instant) -> f32 {
        match self.animation {
            None => self.opacity,
            Some(animation) => {
                let progress = animation.progress(now);
                match animation.effect {
                    AnimationEffect::Fade { to } => self.opacity + (to - self.opacity) * progress,
                    AnimationEffect::SlideOff => self.opacity * (1.0 - progress),
                }
            }
        }
    }

    fn current_offset(&self, now: Instant) -> f32 {
        match self.animation {
            Some(animation @ ActiveAnimation {
                effect: AnimationEffect::SlideOff,
                ..
            }) => -SLIDE_DISTANCE * animation.progress(now),
            _ => 0.0,
        }
    }
}

/// What the overlay should draw right now.
#[derive(Debug, Clone)]
pub struct ToastFrame {
    pub tree: RenderTree,
    pub placement: Placement,
    /// Composite opacity in `[0, 1]` applied to the whole card.
    pub opacity: f32,
    /// Vertical displacement toward the anchored edge, `<= 0`.
    pub offset: f32,
}

/// A [`HostSurface`] backed by shared state an Iced application renders.
#[derive(Debug)]
pub struct IcedSurface {
    state: Arc<Mutex<Option<Attached>>>,
    swipe_tx: broadcast::Sender<(AttachmentId, SwipeDirection)>,
    available: AtomicBool,
}

impl IcedSurface {
    #[must_use]
    pub fn new() -> Self {
        let (swipe_tx, _) = broadcast::channel(SWIPE_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(None)),
            swipe_tx,
            available: AtomicBool::new(true),
        }
    }

    /// Marks the surface (un)available. While unavailable, attach
    /// requests are refused and presentations are skipped.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Release);
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    /// Feeds a swipe gesture recognized over the visible toast.
    pub fn report_swipe(&self, direction: SwipeDirection) {
        let target = self
            .lock_state()
            .as_ref()
            .map(|attached| attached.id);
        if let Some(id) = target {
            let _ = self.swipe_tx.send((id, direction));
        }
    }

    /// Snapshot of the visible toast for rendering, or `None` when the
    /// surface is empty.
    #[must_use]
    pub fn frame(&self) -> Option<ToastFrame> {
        let now = Instant::now();
        self.lock_state().as_ref().map(|attached| ToastFrame {
            tree: attached.tree.clone(),
            placement: attached.placement,
            opacity: attached.current_opacity(now),
            offset: attached.current_offset(now),
        })
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, Option<Attached>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for IcedSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSurface for IcedSurface {
    fn attach(&self, content: RenderTree, placement: Placement) -> Option<AttachmentId> {
        if !self.is_available() {
            return None;
        }
        let id = AttachmentId::next();
        *self.lock_state() = Some(Attached {
            id,
            tree: content,
            placement,
            opacity: 0.0,
            animation: None,
        });
        Some(id)
    }

    fn detach(&self, id: AttachmentId) {
        let mut state = self.lock_state();
        if state.as_ref().is_some_and(|attached| attached.id == id) {
            *state = None;
        }
    }

    fn animate(
        &self,
        id: AttachmentId,
        effect: AnimationEffect,
        duration: Duration,
    ) -> BoxFuture<'static, ()> {
        let now = Instant::now();
        {
            let mut state = self.lock_state();
            if let Some(attached) = state.as_mut().filter(|attached| attached.id == id) {
                // Re-baseline so a new animation continues from the
                // currently rendered opacity instead of jumping.
                attached.opacity = attached.current_opacity(now);
                attached.animation = Some(ActiveAnimation {
                    effect,
                    started: now,
                    duration,
                });
            }
        }

        let state = Arc::clone(&self.state);
        Box::pin(async move {
            tokio::time::sleep(duration).await;
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(attached) = state.as_mut().filter(|attached| attached.id == id) {
                if let Some(animation) = attached.animation.take() {
                    attached.opacity = match animation.effect {
                        AnimationEffect::Fade { to } => to,
                        AnimationEffect::SlideOff => 0.0,
                    };
                }
            }
        })
    }

    fn swipes(&self, id: AttachmentId) -> BoxStream<'static, SwipeDirection> {
        filtered_swipes(self.swipe_tx.subscribe(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MessageToast;
    use crate::render::ToastView;
    use crate::surface::Anchor;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use futures_util::StreamExt;

    fn placement() -> Placement {
        Placement {
            anchor: Anchor::Top,
            padding: 20.0,
        }
    }

    fn tree() -> RenderTree {
        MessageToast::new("test").render()
    }

    #[test]
    fn attach_refused_while_unavailable() {
        let surface = IcedSurface::new();
        surface.set_available(false);

        assert!(surface.attach(tree(), placement()).is_none());
        assert!(surface.frame().is_none());
    }

    #[test]
    fn attached_content_starts_invisible() {
        let surface = IcedSurface::new();
        surface.attach(tree(), placement()).expect("attach failed");

        let frame = surface.frame().expect("no frame");
        assert_abs_diff_eq!(frame.opacity, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(frame.offset, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn detach_clears_the_surface() {
        let surface = IcedSurface::new();
        let id = surface.attach(tree(), placement()).expect("attach failed");

        surface.detach(id);
        assert!(surface.frame().is_none());
    }

    #[test]
    fn detach_ignores_unknown_ids() {
        let surface = IcedSurface::new();
        surface.attach(tree(), placement()).expect("attach failed");

        surface.detach(AttachmentId::next());
        assert!(surface.frame().is_some());
    }

    #[test]
    fn fade_interpolates_linearly() {
        let started = Instant::now();
        let animation = ActiveAnimation {
            effect: AnimationEffect::Fade { to: 1.0 },
            started,
            duration: Duration::from_secs(1),
        };
        let attached = Attached {
            id: AttachmentId::next(),
            tree: tree(),
            placement: placement(),
            opacity: 0.0,
            animation: Some(animation),
        };

        let halfway = started + Duration::from_millis(500);
        assert_abs_diff_eq!(attached.current_opacity(halfway), 0.5, epsilon = F32_EPSILON);

        let done = started + Duration::from_secs(2);
        assert_abs_diff_eq!(attached.current_opacity(done), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn slide_off_moves_toward_the_edge_while_fading() {
        let started = Instant::now();
        let attached = Attached {
            id: AttachmentId::next(),
            tree: tree(),
            placement: placement(),
            opacity: 1.0,
            animation: Some(ActiveAnimation {
                effect: AnimationEffect::SlideOff,
                started,
                duration: Duration::from_secs(1),
            }),
        };

        let halfway = started + Duration::from_millis(500);
        assert_abs_diff_eq!(attached.current_opacity(halfway), 0.5, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(
            attached.current_offset(halfway),
            -SLIDE_DISTANCE / 2.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn zero_duration_animation_is_instantly_complete() {
        let now = Instant::now();
        let animation = ActiveAnimation {
            effect: AnimationEffect::Fade { to: 1.0 },
            started: now,
            duration: Duration::ZERO,
        };

        assert_abs_diff_eq!(animation.progress(now), 1.0, epsilon = F32_EPSILON);
    }

    #[tokio::test(start_paused = true)]
    async fn animate_settles_at_the_target_opacity() {
        let surface = IcedSurface::new();
        let id = surface.attach(tree(), placement()).expect("attach failed");

        surface
            .animate(id, AnimationEffect::Fade { to: 1.0 }, Duration::from_millis(200))
            .await;

        let frame = surface.frame().expect("no frame");
        assert_abs_diff_eq!(frame.opacity, 1.0, epsilon = F32_EPSILON);
    }

    #[tokio::test]
    async fn reported_swipes_reach_the_attachment_stream() {
        let surface = IcedSurface::new();
        let id = surface.attach(tree(), placement()).expect("attach failed");
        let mut swipes = surface.swipes(id);

        surface.report_swipe(SwipeDirection::Up);
        assert_eq!(swipes.next().await, Some(SwipeDirection::Up));
    }

    #[test]
    fn swipes_without_attachment_are_dropped() {
        let surface = IcedSurface::new();
        // Must not panic with no attachment and no subscribers.
        surface.report_swipe(SwipeDirection::Up);
    }
}
