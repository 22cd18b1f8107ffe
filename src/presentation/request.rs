// SPDX-License-Identifier: MPL-2.0
//! Presentation requests.

use std::fmt;
use std::time::Duration;

use crate::config::defaults;
use crate::render::ToastView;
use crate::surface::{Anchor, Placement};

/// Everything needed to show one toast.
///
/// Built with chained setters and immutable once submitted:
///
/// ```
/// use std::time::Duration;
/// use toastline::{Anchor, MessageToast, ToastRequest};
///
/// let request = ToastRequest::new(MessageToast::new("saved"))
///     .with_duration(Duration::from_secs(5))
///     .with_anchor(Anchor::Bottom)
///     .with_padding(12.0);
/// ```
pub struct ToastRequest {
    content: Box<dyn ToastView>,
    duration: Duration,
    anchor: Anchor,
    padding: f32,
}

impl ToastRequest {
    /// Creates a request with the default duration, anchor, and padding.
    pub fn new(content: impl ToastView + 'static) -> Self {
        Self {
            content: Box::new(content),
            duration: Duration::from_secs_f32(defaults::DEFAULT_DURATION_SECS),
            anchor: Anchor::default(),
            padding: defaults::DEFAULT_PADDING,
        }
    }

    /// Sets how long the toast stays visible after its entrance animation.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the surface edge the toast is pinned to.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the distance from the anchored edge. Negative values are
    /// clamped to zero.
    #[must_use]
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[must_use]
    pub fn padding(&self) -> f32 {
        self.padding
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        Placement {
            anchor: self.anchor,
            padding: self.padding,
        }
    }

    #[must_use]
    pub fn content(&self) -> &dyn ToastView {
        self.content.as_ref()
    }
}

impl fmt::Debug for ToastRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRequest")
            .field("duration", &self.duration)
            .field("anchor", &self.anchor)
            .field("padding", &self.padding)
            .finish_non_exhaustive()
    }
}
