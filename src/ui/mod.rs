// SPDX-License-Identifier: MPL-2.0
//! Iced-facing pieces: design tokens, the widget that renders toasts,
//! the Iced-backed host surface, and swipe recognition.
//!
//! A minimal integration wires three things into an application:
//!
//! 1. Share an [`IcedSurface`] between the [`crate::ToastManager`] and
//!    the view.
//! 2. Render [`Toast::view_overlay`] above the normal content, and keep
//!    a redraw subscription running while [`IcedSurface::frame`] is
//!    `Some`.
//! 3. Route pointer press/release events through a [`SwipeTracker`] and
//!    forward recognized gestures to [`IcedSurface::report_swipe`].

pub mod design_tokens;
mod gesture;
mod surface;
mod widget;

pub use gesture::SwipeTracker;
pub use surface::{IcedSurface, ToastFrame};
pub use widget::Toast;
