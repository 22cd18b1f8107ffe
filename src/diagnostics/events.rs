// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for the presentation lifecycle.

use std::time::Instant;

use crate::presentation::TaskId;

/// A single recorded presentation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastEvent {
    /// When the event was recorded (monotonic).
    pub timestamp: Instant,
    pub kind: ToastEventKind,
}

impl ToastEvent {
    pub(crate) fn new(kind: ToastEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// What happened to a presentation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEventKind {
    /// The toast finished its entrance animation and became visible.
    Presented { task: TaskId },
    /// The toast expired after its display duration and faded out.
    AutoDismissed { task: TaskId },
    /// The toast was swiped off the surface.
    SwipeDismissed { task: TaskId },
    /// The toast was removed through an explicit dismiss call.
    DismissRequested { task: TaskId },
    /// No host surface was available; the presentation was skipped.
    SkippedNoSurface { task: TaskId },
}

impl ToastEventKind {
    /// The task the event belongs to.
    #[must_use]
    pub fn task(&self) -> TaskId {
        match *self {
            ToastEventKind::Presented { task }
            | ToastEventKind::AutoDismissed { task }
            | ToastEventKind::SwipeDismissed { task }
            | ToastEventKind::DismissRequested { task }
            | ToastEventKind::SkippedNoSurface { task } => task,
        }
    }
}
