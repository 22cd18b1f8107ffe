// SPDX-License-Identifier: MPL-2.0
//! `toastline` overlays transient toast notifications on a host surface,
//! one at a time.
//!
//! Presentations are serialized through a single-concurrency queue: a
//! submitted toast attaches to the surface only after every earlier
//! toast has fully animated out. A visible toast leaves the screen when
//! its duration expires, when it is swiped upward, or when
//! [`ToastManager::dismiss`] is called.
//!
//! The core is toolkit-agnostic — it talks to a [`HostSurface`] trait
//! and renders content through [`ToastView`] — while the [`ui`] module
//! provides the Iced-backed surface, widgets, and gesture recognition.
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use toastline::ui::IcedSurface;
//! use toastline::{Anchor, MessageToast, ToastManager, ToastRequest};
//!
//! # async fn demo() {
//! let surface = Arc::new(IcedSurface::new());
//! let manager = ToastManager::new(surface.clone());
//!
//! manager.present(
//!     ToastRequest::new(MessageToast::new("Image saved"))
//!         .with_duration(Duration::from_secs(5))
//!         .with_anchor(Anchor::Bottom),
//! );
//! manager.present_simple("Done");
//! # }
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod presentation;
pub mod render;
pub mod surface;
pub mod test_utils;
pub mod ui;

pub use config::ToastConfig;
pub use error::{Error, Result};
pub use presentation::{TaskId, ToastManager, ToastRequest};
pub use render::{BannerToast, CardStyle, MessageToast, RenderNode, RenderTree, TextRole, ToastView};
pub use surface::{Anchor, AnimationEffect, AttachmentId, HostSurface, Placement, SwipeDirection};
