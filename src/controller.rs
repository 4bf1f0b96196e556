// SPDX-License-Identifier: MPL-2.0
//! Filter state controller: the owning context that keeps the three sources
//! of truth aligned and drives the visibility engine.
//!
//! One [`PageController`] covers one page lifecycle: [`PageController::init`]
//! on load, [`PageController::run`] for the event loop,
//! [`PageController::dispose`] on unload. Events are dispatched one at a
//! time to completion; there is no handler concurrency and no locking of
//! controller state.

use crate::address::AddressBar;
use crate::domain::{Filter, MediaId};
use crate::motion::MotionSignal;
use crate::page::{sync, Page};
use crate::playback::{MediaHost, ViewportHost, VisibilityEngine};
use crate::store::FilterStore;
use std::fmt;
use tokio::sync::mpsc;

/// Options for [`PageController::apply_filter`].
///
/// Both default to true; the preference-change path forces both false so a
/// preference flip never rewrites stored or addressed filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Write the filter to the key-value store (best-effort).
    pub persist: bool,
    /// Rewrite the address's query parameter (best-effort, replace-style).
    pub update_query: bool,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            persist: true,
            update_query: true,
        }
    }
}

impl ApplyOptions {
    /// Options for resync paths that must leave persisted state untouched.
    #[must_use]
    pub fn transient() -> Self {
        Self {
            persist: false,
            update_query: false,
        }
    }
}

/// Host-delivered events the controller reacts to.
#[derive(Debug, Clone)]
pub enum Event {
    /// A filter control was activated, carrying its raw associated value.
    FilterRequested(String),
    /// The live tracker reported a media element crossing the threshold.
    Intersection {
        media: MediaId,
        intersecting: bool,
    },
    /// The reduced-motion preference flipped.
    MotionPreferenceChanged,
}

/// Clone-able process-wide entry point.
///
/// External code requests filter changes through it, and viewport tracker
/// implementations deliver their notifications through it. Sends are
/// fire-and-forget; once the controller's loop is gone they are discarded.
#[derive(Debug, Clone)]
pub struct FilterHandle {
    tx: mpsc::UnboundedSender<Event>,
}

impl FilterHandle {
    /// Requests a filter change; unknown values normalize to `all`.
    pub fn apply_filter(&self, requested: impl Into<String>) {
        let _ = self.tx.send(Event::FilterRequested(requested.into()));
    }

    /// Delivers one viewport notification.
    pub fn notify_intersection(&self, media: MediaId, intersecting: bool) {
        let _ = self.tx.send(Event::Intersection {
            media,
            intersecting,
        });
    }
}

/// Creates the event channel: the handle for producers and the receiver
/// consumed by [`PageController::run`].
#[must_use]
pub fn event_channel() -> (FilterHandle, mpsc::UnboundedReceiver<Event>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (FilterHandle { tx }, rx)
}

/// Host bindings the controller drives.
pub struct Hosts {
    /// Durable key-value store for the filter.
    pub store: Box<dyn FilterStore>,
    /// The page address.
    pub address: Box<dyn AddressBar>,
    /// Playback machinery.
    pub media: Box<dyn MediaHost>,
    /// Viewport-tracking capability.
    pub viewport: Box<dyn ViewportHost>,
    /// Reduced-motion preference signal.
    pub motion: Box<dyn MotionSignal>,
}

impl fmt::Debug for Hosts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hosts").finish_non_exhaustive()
    }
}

/// The filter state controller.
pub struct PageController {
    page: Page,
    active_filter: Filter,
    engine: VisibilityEngine,
    hosts: Hosts,
}

impl fmt::Debug for PageController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageController")
            .field("active_filter", &self.active_filter)
            .field("has_tracker", &self.engine.has_tracker())
            .finish_non_exhaustive()
    }
}

impl PageController {
    /// A controller over the given element set and host bindings.
    ///
    /// The active filter starts at the default until [`PageController::init`]
    /// resolves the startup value.
    #[must_use]
    pub fn new(page: Page, hosts: Hosts) -> Self {
        Self {
            page,
            active_filter: Filter::default(),
            engine: VisibilityEngine::new(),
            hosts,
        }
    }

    /// Currently active filter.
    #[must_use]
    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    /// The element set, for inspection.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// True while the engine holds a live viewport tracker.
    #[must_use]
    pub fn has_tracker(&self) -> bool {
        self.engine.has_tracker()
    }

    /// Resolves the startup filter and brings the whole system to its
    /// initial state.
    ///
    /// Resolution order: address query parameter, then stored value, then
    /// the default. The resolved filter is applied with both options forced
    /// true, so a query-supplied filter becomes durably remembered and a
    /// stored one becomes reflected in the address. The viewport tracker is
    /// created afterwards.
    ///
    /// A page without filter controls is not a publication page; it is left
    /// untouched.
    pub fn init(&mut self) {
        if self.page.buttons().is_empty() {
            return;
        }
        let initial = self.resolve_startup_filter();
        self.apply_filter(initial.as_str(), ApplyOptions::default());
        let reduced = self.hosts.motion.prefers_reduced_motion();
        self.engine.reset(
            &mut self.page,
            self.hosts.media.as_mut(),
            self.hosts.viewport.as_mut(),
            reduced,
        );
    }

    fn resolve_startup_filter(&self) -> Filter {
        // A present-but-empty parameter value counts as absent.
        let query = self
            .hosts
            .address
            .filter_param()
            .filter(|value| !value.is_empty());
        if let Some(raw) = query {
            return Filter::normalize(&raw);
        }
        // An unreadable store resolves to the default.
        match self.hosts.store.load() {
            Ok(Some(raw)) => Filter::normalize(&raw),
            Ok(None) | Err(_) => Filter::default(),
        }
    }

    /// Applies a filter across presentation, playback, and the persistence
    /// channels.
    ///
    /// Normalization is total, so this never fails; persistence and address
    /// failures are deliberately discarded.
    pub fn apply_filter(&mut self, requested: &str, options: ApplyOptions) {
        let filter = Filter::normalize(requested);
        self.active_filter = filter;

        sync::sync_buttons(&mut self.page, filter);
        sync::sync_cards(&mut self.page, filter);
        let reduced = self.hosts.motion.prefers_reduced_motion();
        self.engine
            .sync(&mut self.page, self.hosts.media.as_mut(), reduced);

        if options.persist {
            let _ = self.hosts.store.save(filter.as_str());
        }
        if options.update_query {
            let _ = self.hosts.address.replace_filter_param(filter);
        }
    }

    /// Dispatches one host-delivered event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::FilterRequested(raw) => {
                self.apply_filter(&raw, ApplyOptions::default());
            }
            Event::Intersection {
                media,
                intersecting,
            } => {
                self.engine.on_intersection(
                    &mut self.page,
                    self.hosts.media.as_mut(),
                    media,
                    intersecting,
                );
            }
            Event::MotionPreferenceChanged => self.on_motion_preference_change(),
        }
    }

    /// Recreates the tracker and re-runs the presentation and playback sync
    /// for the current filter, without touching stored or addressed state.
    fn on_motion_preference_change(&mut self) {
        let reduced = self.hosts.motion.prefers_reduced_motion();
        self.engine.reset(
            &mut self.page,
            self.hosts.media.as_mut(),
            self.hosts.viewport.as_mut(),
            reduced,
        );
        let active = self.active_filter;
        self.apply_filter(active.as_str(), ApplyOptions::transient());
    }

    /// Tears down the viewport tracker.
    pub fn dispose(&mut self) {
        self.engine.stop();
    }

    /// Runs the event loop until every [`FilterHandle`] is dropped, then
    /// disposes and returns the controller for inspection.
    ///
    /// One event is dispatched at a time, to completion. When the motion
    /// signal offers a change subscription it is consumed here; hosts
    /// without one simply never deliver
    /// [`Event::MotionPreferenceChanged`] from this loop.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<Event>) -> Self {
        enum Wake {
            Event(Option<Event>),
            MotionClosed,
        }

        let mut motion_changes = self.hosts.motion.subscribe();
        loop {
            let wake = if let Some(rx) = motion_changes.as_mut() {
                tokio::select! {
                    event = events.recv() => Wake::Event(event),
                    changed = rx.changed() => match changed {
                        Ok(()) => Wake::Event(Some(Event::MotionPreferenceChanged)),
                        Err(_) => Wake::MotionClosed,
                    },
                }
            } else {
                Wake::Event(events.recv().await)
            };

            match wake {
                Wake::Event(Some(event)) => self.handle_event(event),
                Wake::Event(None) => break,
                // The signal's sender is gone; keep running on events alone.
                Wake::MotionClosed => motion_changes = None,
            }
        }
        self.dispose();
        self
    }
}
