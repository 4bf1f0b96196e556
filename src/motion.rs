// SPDX-License-Identifier: MPL-2.0
//! The host's reduced-motion accessibility signal.
//!
//! The signal is owned by the host and read-only for this crate. It is
//! polled wherever playback is re-evaluated; change notifications arrive
//! through an optional watch subscription consumed by the controller's
//! event loop.

use tokio::sync::watch;

/// Read-only view of the host's reduced-motion preference.
pub trait MotionSignal {
    /// Current preference; true when the host asks for minimized motion.
    fn prefers_reduced_motion(&self) -> bool;

    /// Change subscription, when the host can deliver notifications.
    ///
    /// Hosts without that capability return `None` and the preference is
    /// simply re-polled at the moments the core already re-evaluates
    /// playback.
    fn subscribe(&self) -> Option<watch::Receiver<bool>> {
        None
    }
}

/// A signal with a fixed value and no change notifications.
///
/// Also stands in for hosts with no motion signal at all: the default is
/// "motion permitted".
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMotion {
    reduced: bool,
}

impl StaticMotion {
    #[must_use]
    pub fn new(reduced: bool) -> Self {
        Self { reduced }
    }
}

impl MotionSignal for StaticMotion {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced
    }
}

/// A watch-backed signal whose owner flips the value through the sender.
#[derive(Debug, Clone)]
pub struct WatchMotion {
    rx: watch::Receiver<bool>,
}

impl WatchMotion {
    /// Creates the signal plus the sender half the host keeps.
    #[must_use]
    pub fn channel(reduced: bool) -> (watch::Sender<bool>, Self) {
        let (tx, rx) = watch::channel(reduced);
        (tx, Self { rx })
    }
}

impl MotionSignal for WatchMotion {
    fn prefers_reduced_motion(&self) -> bool {
        *self.rx.borrow()
    }

    fn subscribe(&self) -> Option<watch::Receiver<bool>> {
        Some(self.rx.clone())
    }
}
