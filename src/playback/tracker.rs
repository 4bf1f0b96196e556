// SPDX-License-Identifier: MPL-2.0
//! Viewport-intersection tracking capability.
//!
//! Notifications from a live tracker flow back into the core as
//! [`crate::controller::Event::Intersection`] through the controller's
//! event channel; the tracker object itself only carries registration and
//! teardown.

use crate::domain::MediaId;

/// Fraction of a media element's area that must intersect the viewport
/// before it counts as on screen.
pub const INTERSECTION_THRESHOLD: f32 = 0.25;

/// Tracker configuration handed to the host when one is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Intersection ratio at which the host must notify.
    pub threshold: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            threshold: INTERSECTION_THRESHOLD,
        }
    }
}

/// A live viewport tracker owned by the visibility engine.
pub trait ViewportTracker {
    /// Registers a media element for intersection notifications.
    fn observe(&mut self, media: MediaId);

    /// Stops all notifications. Called exactly once, before the tracker is
    /// dropped.
    fn disconnect(&mut self);
}

/// Host capability for creating viewport trackers.
pub trait ViewportHost {
    /// Creates a tracker, or `None` when the host has no viewport-tracking
    /// capability.
    fn create_tracker(&mut self, config: TrackerConfig) -> Option<Box<dyn ViewportTracker>>;
}

/// A host with no viewport-tracking capability.
///
/// The engine then evaluates playback directly from card visibility and the
/// motion preference, treating "on screen" as vacuously true.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoViewport;

impl ViewportHost for NoViewport {
    fn create_tracker(&mut self, _config: TrackerConfig) -> Option<Box<dyn ViewportTracker>> {
        None
    }
}
