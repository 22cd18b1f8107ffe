// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for default values used
//! across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Presentation**: display durations and placement
//! - **Animation**: entrance and exit timing
//! - **Diagnostics**: event buffering bounds

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Default display duration for a presented toast (in seconds).
pub const DEFAULT_DURATION_SECS: f32 = 3.0;

/// Default display duration for `present_simple` (in seconds).
pub const SIMPLE_DURATION_SECS: f32 = 2.0;

/// Default distance from the anchored edge (in logical pixels).
pub const DEFAULT_PADDING: f32 = 20.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Fade-in duration when a toast appears (in seconds).
pub const FADE_IN_SECS: f32 = 0.5;

/// Fade-out duration when a toast expires or is dismissed (in seconds).
pub const FADE_OUT_SECS: f32 = 0.5;

/// Slide-off duration when a toast is swiped away (in seconds).
pub const SLIDE_OUT_SECS: f32 = 0.25;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostics event buffer.
pub const DEFAULT_EVENT_BUFFER_CAPACITY: usize = 1000;

/// Capacity of the channel between handles and the collector.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;
