// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture recognition.
//!
//! Tracks a press/release pair and classifies it as a swipe when the
//! pointer traveled far enough, fast enough. The application routes the
//! result into [`super::IcedSurface::report_swipe`].

use std::time::{Duration, Instant};

use iced::Point;

use crate::surface::SwipeDirection;

/// Minimum travel distance along the dominant axis for a swipe.
const MIN_TRAVEL: f32 = 40.0;

/// A press held longer than this is a drag, not a swipe.
const MAX_PRESS_DURATION: Duration = Duration::from_millis(500);

/// Swipe recognizer state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    press: Option<Press>,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    position: Point,
    at: Instant,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the press starting a potential swipe.
    pub fn press(&mut self, position: Point) {
        self.press = Some(Press {
            position,
            at: Instant::now(),
        });
    }

    /// Completes the gesture. Returns the swipe direction, or `None` for
    /// presses that were too slow or traveled too little.
    pub fn release(&mut self, position: Point) -> Option<SwipeDirection> {
        let press = self.press.take()?;
        if press.at.elapsed() > MAX_PRESS_DURATION {
            return None;
        }
        classify(press.position, position)
    }

    /// Abandons the gesture in progress (e.g. the pointer left the
    /// window).
    pub fn cancel(&mut self) {
        self.press = None;
    }
}

/// Classifies the travel between two points along its dominant axis.
fn classify(from: Point, to: Point) -> Option<SwipeDirection> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx.abs().max(dy.abs()) < MIN_TRAVEL {
        return None;
    }
    Some(if dx.abs() > dy.abs() {
        if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    } else if dy > 0.0 {
        SwipeDirection::Down
    } else {
        SwipeDirection::Up
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upward_travel_classifies_as_up() {
        let direction = classify(Point::new(100.0, 200.0), Point::new(105.0, 120.0));
        assert_eq!(direction, Some(SwipeDirection::Up));
    }

    #[test]
    fn dominant_axis_wins() {
        let direction = classify(Point::new(0.0, 0.0), Point::new(90.0, -50.0));
        assert_eq!(direction, Some(SwipeDirection::Right));
    }

    #[test]
    fn short_travel_is_not_a_swipe() {
        let direction = classify(Point::new(0.0, 0.0), Point::new(10.0, -10.0));
        assert_eq!(direction, None);
    }

    #[test]
    fn downward_travel_classifies_as_down() {
        let direction = classify(Point::new(50.0, 0.0), Point::new(50.0, 80.0));
        assert_eq!(direction, Some(SwipeDirection::Down));
    }

    #[test]
    fn press_then_quick_release_recognizes_the_swipe() {
        let mut tracker = SwipeTracker::new();
        tracker.press(Point::new(100.0, 300.0));

        let direction = tracker.release(Point::new(100.0, 200.0));
        assert_eq!(direction, Some(SwipeDirection::Up));
    }

    #[test]
    fn release_without_press_yields_nothing() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.release(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn cancel_discards_the_gesture() {
        let mut tracker = SwipeTracker::new();
        tracker.press(Point::new(100.0, 300.0));
        tracker.cancel();

        assert_eq!(tracker.release(Point::new(100.0, 100.0)), None);
    }
}
