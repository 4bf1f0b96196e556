// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the host traits.
//!
//! The doubles log through shared `Arc<Mutex<_>>` state so a test keeps an
//! observable handle even after boxing a clone into the controller.

use crate::address::{AddressBar, PageAddress};
use crate::domain::MediaId;
use crate::error::{Error, Result};
use crate::playback::{MediaHost, PlayRejected, TrackerConfig, ViewportHost, ViewportTracker};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// One playback command issued to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play(MediaId),
    Pause(MediaId),
}

/// Media host that records every command and can reject selected elements.
#[derive(Debug, Clone, Default)]
pub struct RecordingMediaHost {
    commands: Arc<Mutex<Vec<PlaybackCommand>>>,
    rejected: HashSet<MediaId>,
}

impl RecordingMediaHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an element whose play requests the host will reject.
    pub fn reject(&mut self, media: MediaId) {
        self.rejected.insert(media);
    }

    /// Commands issued so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> Vec<PlaybackCommand> {
        self.commands.lock().expect("command log poisoned").clone()
    }

    /// Drops the recorded history.
    pub fn clear(&self) {
        self.commands.lock().expect("command log poisoned").clear();
    }
}

impl MediaHost for RecordingMediaHost {
    fn play(&mut self, media: MediaId) -> std::result::Result<(), PlayRejected> {
        self.commands
            .lock()
            .expect("command log poisoned")
            .push(PlaybackCommand::Play(media));
        if self.rejected.contains(&media) {
            return Err(PlayRejected("autoplay policy".to_string()));
        }
        Ok(())
    }

    fn pause(&mut self, media: MediaId) {
        self.commands
            .lock()
            .expect("command log poisoned")
            .push(PlaybackCommand::Pause(media));
    }
}

/// Observation log shared between a [`ScriptedViewport`] and its trackers.
#[derive(Debug, Clone, Default)]
pub struct TrackerLog {
    /// Trackers created so far.
    pub created: usize,
    /// Elements registered, in order, across all trackers.
    pub observed: Vec<MediaId>,
    /// Disconnect calls across all trackers.
    pub disconnected: usize,
    /// Threshold of the most recently created tracker.
    pub last_threshold: Option<f32>,
}

/// Viewport host handing out trackers that write to a shared log.
#[derive(Debug, Clone, Default)]
pub struct ScriptedViewport {
    log: Arc<Mutex<TrackerLog>>,
}

impl ScriptedViewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the shared log.
    #[must_use]
    pub fn log(&self) -> TrackerLog {
        self.log.lock().expect("tracker log poisoned").clone()
    }
}

impl ViewportHost for ScriptedViewport {
    fn create_tracker(&mut self, config: TrackerConfig) -> Option<Box<dyn ViewportTracker>> {
        let mut log = self.log.lock().expect("tracker log poisoned");
        log.created += 1;
        log.last_threshold = Some(config.threshold);
        Some(Box::new(LogTracker {
            log: Arc::clone(&self.log),
        }))
    }
}

#[derive(Debug)]
struct LogTracker {
    log: Arc<Mutex<TrackerLog>>,
}

impl ViewportTracker for LogTracker {
    fn observe(&mut self, media: MediaId) {
        self.log
            .lock()
            .expect("tracker log poisoned")
            .observed
            .push(media);
    }

    fn disconnect(&mut self) {
        self.log.lock().expect("tracker log poisoned").disconnected += 1;
    }
}

/// Address bar double that shares its state with the test.
///
/// Behaves exactly like the [`PageAddress`] it wraps, but the test keeps a
/// clone and can snapshot the address after boxing one into the controller.
#[derive(Debug, Clone)]
pub struct SharedAddress {
    inner: Arc<Mutex<PageAddress>>,
}

impl SharedAddress {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PageAddress::parse(raw))),
        }
    }

    /// Snapshot of the current address.
    #[must_use]
    pub fn current(&self) -> PageAddress {
        self.inner.lock().expect("address poisoned").clone()
    }
}

impl AddressBar for SharedAddress {
    fn filter_param(&self) -> Option<String> {
        self.inner.lock().expect("address poisoned").filter_param()
    }

    fn replace_filter_param(&mut self, filter: crate::domain::Filter) -> Result<()> {
        self.inner
            .lock()
            .expect("address poisoned")
            .replace_filter_param(filter)
    }
}

/// An address bar whose host refuses every rewrite.
///
/// Reads report no parameter; writes fail. The controller must shrug both
/// off.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingAddress;

impl AddressBar for FailingAddress {
    fn filter_param(&self) -> Option<String> {
        None
    }

    fn replace_filter_param(&mut self, _filter: crate::domain::Filter) -> Result<()> {
        Err(Error::Address("replace rejected by host".to_string()))
    }
}
