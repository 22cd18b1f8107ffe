// SPDX-License-Identifier: MPL-2.0
//! Collector for aggregating and storing presentation events.
//!
//! The collector receives events from handles installed on the toast
//! manager and stores them in a circular buffer.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::buffer::CircularBuffer;
use super::events::{ToastEvent, ToastEventKind};
use crate::config::defaults::EVENT_CHANNEL_CAPACITY;

/// Handle for sending presentation events to the collector.
///
/// Cheap to clone and shareable across tasks. Sends are non-blocking;
/// events are dropped when the channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ToastEvent>,
}

impl DiagnosticsHandle {
    /// Records a presentation event.
    pub fn log(&self, kind: ToastEventKind) {
        let _ = self.event_tx.try_send(ToastEvent::new(kind));
    }
}

/// Aggregates presentation events into a memory-bounded buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_rx: Receiver<ToastEvent>,
    buffer: CircularBuffer<ToastEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector with the given buffer capacity and a handle
    /// feeding it.
    #[must_use]
    pub fn new(capacity: usize) -> (Self, DiagnosticsHandle) {
        let (event_tx, event_rx) = bounded(EVENT_CHANNEL_CAPACITY);
        (
            Self {
                event_rx,
                buffer: CircularBuffer::with_capacity(capacity),
            },
            DiagnosticsHandle { event_tx },
        )
    }

    /// Moves all pending events from the channel into the buffer.
    pub fn drain(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns the collected events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &ToastEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discards everything collected so far.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::TaskId;

    #[test]
    fn logged_events_arrive_after_drain() {
        let (mut collector, handle) = DiagnosticsCollector::new(16);
        let task = TaskId::next();

        handle.log(ToastEventKind::Presented { task });
        handle.log(ToastEventKind::AutoDismissed { task });
        assert!(collector.is_empty());

        collector.drain();
        let kinds: Vec<_> = collector.events().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ToastEventKind::Presented { task },
                ToastEventKind::AutoDismissed { task },
            ]
        );
    }

    #[test]
    fn buffer_capacity_bounds_collected_events() {
        let (mut collector, handle) = DiagnosticsCollector::new(2);
        let task = TaskId::next();

        for _ in 0..5 {
            handle.log(ToastEventKind::Presented { task });
        }
        collector.drain();

        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn logging_after_collector_drop_is_silent() {
        let (collector, handle) = DiagnosticsCollector::new(4);
        drop(collector);

        // Must not panic or block.
        handle.log(ToastEventKind::Presented { task: TaskId::next() });
    }
}
