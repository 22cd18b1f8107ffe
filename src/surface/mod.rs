// SPDX-License-Identifier: MPL-2.0
//! The host-surface seam.
//!
//! A [`HostSurface`] is the top-level window or screen toasts attach to.
//! The presentation core only ever talks to this trait: it attaches
//! rendered content, starts animations and awaits their completion, and
//! listens for swipe gestures. Concrete surfaces live elsewhere —
//! [`crate::ui::IcedSurface`] backs an Iced application overlay and
//! [`crate::test_utils::RecordingSurface`] backs tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::stream::{self, BoxStream};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::render::RenderTree;

/// Unique identifier for content attached to a host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentId(u64);

impl AttachmentId {
    /// Creates a new unique attachment ID.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Vertical edge of the surface a toast is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Anchor {
    #[default]
    Top,
    Bottom,
}

/// Where on the surface attached content is pinned.
///
/// `padding` is the distance from the anchored edge, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub anchor: Anchor,
    pub padding: f32,
}

/// A single animation a surface performs on attached content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationEffect {
    /// Animate opacity toward the target value.
    Fade { to: f32 },
    /// Slide the content off the anchored edge while fading it out.
    SlideOff,
}

/// Direction of a completed swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// The top-level window or screen toasts attach to.
///
/// All methods are callable from the presentation worker task; animation
/// completion is awaited through the returned future, never through a
/// callback.
pub trait HostSurface: Send + Sync {
    /// Attaches rendered content at the given placement.
    ///
    /// Returns `None` when no surface is currently available (e.g. no
    /// active window); the caller is expected to skip the presentation
    /// silently.
    fn attach(&self, content: RenderTree, placement: Placement) -> Option<AttachmentId>;

    /// Removes previously attached content. Unknown IDs are ignored.
    fn detach(&self, id: AttachmentId);

    /// Starts an animation on the attachment; the future resolves once it
    /// has completed.
    fn animate(
        &self,
        id: AttachmentId,
        effect: AnimationEffect,
        duration: Duration,
    ) -> BoxFuture<'static, ()>;

    /// Stream of swipe gestures recognized on the attachment.
    fn swipes(&self, id: AttachmentId) -> BoxStream<'static, SwipeDirection>;
}

/// Narrows a surface-wide swipe broadcast down to one attachment.
///
/// Lagged receivers skip ahead; the stream ends when the surface drops
/// its sender.
pub(crate) fn filtered_swipes(
    rx: broadcast::Receiver<(AttachmentId, SwipeDirection)>,
    id: AttachmentId,
) -> BoxStream<'static, SwipeDirection> {
    Box::pin(stream::unfold(rx, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok((target, direction)) if target == id => return Some((direction, rx)),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[test]
    fn attachment_ids_are_unique() {
        let a = AttachmentId::next();
        let b = AttachmentId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn default_anchor_is_top() {
        assert_eq!(Anchor::default(), Anchor::Top);
    }

    #[tokio::test]
    async fn filtered_swipes_only_yields_gestures_for_the_target() {
        let (tx, rx) = broadcast::channel(8);
        let target = AttachmentId::next();
        let other = AttachmentId::next();
        let mut swipes = filtered_swipes(rx, target);

        tx.send((other, SwipeDirection::Up)).expect("send failed");
        tx.send((target, SwipeDirection::Left)).expect("send failed");

        assert_eq!(swipes.next().await, Some(SwipeDirection::Left));
    }

    #[tokio::test]
    async fn filtered_swipes_ends_when_the_sender_is_dropped() {
        let (tx, rx) = broadcast::channel(8);
        let target = AttachmentId::next();
        let mut swipes = filtered_swipes(rx, target);

        drop(tx);
        assert_eq!(swipes.next().await, None);
    }
}
