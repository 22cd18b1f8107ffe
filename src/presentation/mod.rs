// SPDX-License-Identifier: MPL-2.0
//! The presentation core: requests, tasks, the serial queue, and the
//! manager.
//!
//! # Components
//!
//! - [`request`] - `ToastRequest` builder describing one toast
//! - [`task`] - `PresentationTask` lifecycle state machine
//! - [`queue`] - `PresentationQueue`, the single-concurrency scheduler
//! - [`manager`] - `ToastManager`, the public entry point
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use toastline::ui::IcedSurface;
//! use toastline::{Anchor, BannerToast, ToastManager, ToastRequest};
//!
//! # async fn demo() {
//! let surface = Arc::new(IcedSurface::new());
//! let manager = ToastManager::new(surface);
//!
//! manager.present(
//!     ToastRequest::new(BannerToast::new("Export", "3 files written"))
//!         .with_anchor(Anchor::Bottom),
//! );
//!
//! // Later, from anywhere holding the manager:
//! manager.dismiss();
//! # }
//! ```

pub(crate) mod manager;
pub(crate) mod queue;
pub(crate) mod request;
pub(crate) mod task;

pub use manager::ToastManager;
pub use request::ToastRequest;
pub use task::{TaskId, TaskState};
