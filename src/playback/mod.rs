// SPDX-License-Identifier: MPL-2.0
//! Media visibility engine: the per-element Playing/Paused state machine
//! and the viewport-tracker lifecycle.
//!
//! An element plays iff its enclosing card is visible, it is on screen
//! (when a tracker is live; vacuously true otherwise), and the host does
//! not prefer reduced motion.

pub mod tracker;

pub use tracker::{
    NoViewport, TrackerConfig, ViewportHost, ViewportTracker, INTERSECTION_THRESHOLD,
};

use crate::domain::{MediaId, PlaybackState};
use crate::page::Page;
use std::fmt;

/// Reason a host refused to start playback (autoplay policy and the like).
///
/// Deliberately not part of [`crate::error::Error`]: a rejection is host
/// policy, not a fault, and the engine's only response is to leave the
/// element paused.
#[derive(Debug, Clone)]
pub struct PlayRejected(pub String);

impl fmt::Display for PlayRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "playback rejected: {}", self.0)
    }
}

/// Host playback machinery.
pub trait MediaHost {
    /// Requests playback start. The host may reject the request; the engine
    /// observes the rejection and leaves the element paused.
    fn play(&mut self, media: MediaId) -> Result<(), PlayRejected>;

    /// Requests playback stop. Synchronous and non-failing.
    fn pause(&mut self, media: MediaId);
}

/// Viewport-aware playback engine.
///
/// At most one tracker is live at a time, enforced by the `Option` field.
/// [`VisibilityEngine::stop`] is the sole cancellation primitive and is
/// idempotent; [`VisibilityEngine::reset`] tears down before recreating, so
/// two trackers never observe the same element set concurrently.
#[derive(Default)]
pub struct VisibilityEngine {
    tracker: Option<Box<dyn ViewportTracker>>,
}

impl fmt::Debug for VisibilityEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityEngine")
            .field("has_tracker", &self.tracker.is_some())
            .finish()
    }
}

impl VisibilityEngine {
    /// An engine with no live tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a tracker is live.
    #[must_use]
    pub fn has_tracker(&self) -> bool {
        self.tracker.is_some()
    }

    /// Tears down the tracker. Idempotent; safe when no tracker is live.
    pub fn stop(&mut self) {
        if let Some(mut tracker) = self.tracker.take() {
            tracker.disconnect();
        }
    }

    /// Recreates the tracker (tearing down any live one first) and brings
    /// every element to its correct initial state.
    ///
    /// With reduced motion on, or on hosts without the capability, no
    /// tracker is created and every element is evaluated once directly from
    /// card visibility and the preference. Otherwise all current media
    /// elements are registered before the first evaluation, then one resync
    /// pass runs so elements already in view start without waiting for a
    /// notification.
    pub fn reset(
        &mut self,
        page: &mut Page,
        media_host: &mut dyn MediaHost,
        viewport: &mut dyn ViewportHost,
        reduced_motion: bool,
    ) {
        self.stop();
        if !reduced_motion {
            if let Some(mut tracker) = viewport.create_tracker(TrackerConfig::default()) {
                for media in page.media_ids() {
                    tracker.observe(media);
                }
                self.tracker = Some(tracker);
            }
        }
        self.sync(page, media_host, reduced_motion);
    }

    /// Re-evaluates playback for every element after presentation changed.
    ///
    /// A hidden card's media is paused unconditionally, overriding any
    /// stale tracker state from before the card was hidden. For visible
    /// cards the tracker, while live, stays authoritative for the viewport
    /// term; with no tracker the preference decides directly.
    pub fn sync(&mut self, page: &mut Page, media_host: &mut dyn MediaHost, reduced_motion: bool) {
        let has_tracker = self.tracker.is_some();
        for media in page.media_ids() {
            if !page.is_media_visible(media) {
                Self::transition(page, media_host, media, false);
            } else if !has_tracker {
                Self::transition(page, media_host, media, !reduced_motion);
            }
        }
    }

    /// Applies one viewport notification from the live tracker.
    ///
    /// A live tracker implies the preference was off when it was created,
    /// so only the card-visibility term is re-checked here. Notifications
    /// arriving after teardown are ignored.
    pub fn on_intersection(
        &mut self,
        page: &mut Page,
        media_host: &mut dyn MediaHost,
        media: MediaId,
        intersecting: bool,
    ) {
        if self.tracker.is_none() {
            return;
        }
        let should_play = intersecting && page.is_media_visible(media);
        Self::transition(page, media_host, media, should_play);
    }

    /// Single Playing/Paused transition for one element.
    fn transition(
        page: &mut Page,
        media_host: &mut dyn MediaHost,
        media: MediaId,
        should_play: bool,
    ) {
        if !should_play {
            media_host.pause(media);
            page.set_playback(media, PlaybackState::Paused);
            return;
        }
        // The host may refuse (autoplay policy); the element then just
        // stays paused.
        match media_host.play(media) {
            Ok(()) => page.set_playback(media, PlaybackState::Playing),
            Err(_) => page.set_playback(media, PlaybackState::Paused),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Filter;
    use crate::page::sync;
    use crate::test_utils::{PlaybackCommand, RecordingMediaHost, ScriptedViewport};

    struct Fixture {
        page: Page,
        media_host: RecordingMediaHost,
        viewport: ScriptedViewport,
        engine: VisibilityEngine,
        media: Vec<MediaId>,
    }

    /// Three cards (featured, plain, featured), one media element each.
    fn fixture() -> Fixture {
        let mut page = Page::new();
        let mut media = Vec::new();
        for featured in [true, false, true] {
            let card = page.add_card(featured);
            media.push(page.add_media(card));
        }
        Fixture {
            page,
            media_host: RecordingMediaHost::new(),
            viewport: ScriptedViewport::new(),
            engine: VisibilityEngine::new(),
            media,
        }
    }

    #[test]
    fn reset_without_reduced_motion_creates_one_tracker() {
        let mut fx = fixture();
        fx.engine
            .reset(&mut fx.page, &mut fx.media_host, &mut fx.viewport, false);

        assert!(fx.engine.has_tracker());
        let log = fx.viewport.log();
        assert_eq!(log.created, 1);
        assert_eq!(log.observed, fx.media);
        assert!((log.last_threshold.expect("threshold recorded") - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn reset_with_reduced_motion_skips_the_tracker_and_pauses_everything() {
        let mut fx = fixture();
        fx.engine
            .reset(&mut fx.page, &mut fx.media_host, &mut fx.viewport, true);

        assert!(!fx.engine.has_tracker());
        assert_eq!(fx.viewport.log().created, 0);
        for media in &fx.media {
            assert!(fx.page.playback(*media).expect("known media").is_paused());
        }
    }

    #[test]
    fn reset_without_capability_plays_visible_elements_directly() {
        let mut fx = fixture();
        let mut no_viewport = NoViewport;
        fx.engine
            .reset(&mut fx.page, &mut fx.media_host, &mut no_viewport, false);

        assert!(!fx.engine.has_tracker());
        // "On screen" is vacuously true without a tracker.
        for media in &fx.media {
            assert!(fx.page.playback(*media).expect("known media").is_playing());
        }
    }

    #[test]
    fn with_a_tracker_the_sync_pass_leaves_visible_elements_alone() {
        let mut fx = fixture();
        fx.engine
            .reset(&mut fx.page, &mut fx.media_host, &mut fx.viewport, false);
        fx.media_host.clear();

        fx.engine.sync(&mut fx.page, &mut fx.media_host, false);
        // All cards visible, tracker live: no commands at all.
        assert!(fx.media_host.commands().is_empty());
    }

    #[test]
    fn hidden_card_media_is_paused_even_with_stale_intersection() {
        let mut fx = fixture();
        fx.engine
            .reset(&mut fx.page, &mut fx.media_host, &mut fx.viewport, false);

        // Elements 0 and 1 are intersecting, then card 1 gets hidden.
        fx.engine
            .on_intersection(&mut fx.page, &mut fx.media_host, fx.media[0], true);
        fx.engine
            .on_intersection(&mut fx.page, &mut fx.media_host, fx.media[1], true);
        assert!(fx.page.playback(fx.media[1]).expect("known").is_playing());

        sync::sync_cards(&mut fx.page, Filter::Featured);
        fx.engine.sync(&mut fx.page, &mut fx.media_host, false);

        assert!(fx.page.playback(fx.media[1]).expect("known").is_paused());
        // The featured cards stay under tracker authority, untouched.
        assert!(fx.page.playback(fx.media[0]).expect("known").is_playing());
    }

    #[test]
    fn intersection_with_hidden_card_never_plays() {
        let mut fx = fixture();
        fx.engine
            .reset(&mut fx.page, &mut fx.media_host, &mut fx.viewport, false);
        sync::sync_cards(&mut fx.page, Filter::Featured);

        fx.engine
            .on_intersection(&mut fx.page, &mut fx.media_host, fx.media[1], true);
        assert!(fx.page.playback(fx.media[1]).expect("known").is_paused());
    }

    #[test]
    fn leaving_the_viewport_pauses_the_element() {
        let mut fx = fixture();
        fx.engine
            .reset(&mut fx.page, &mut fx.media_host, &mut fx.viewport, false);

        fx.engine
            .on_intersection(&mut fx.page, &mut fx.media_host, fx.media[0], true);
        fx.engine
            .on_intersection(&mut fx.page, &mut fx.media_host, fx.media[0], false);
        assert!(fx.page.playback(fx.media[0]).expect("known").is_paused());
    }

    #[test]
    fn rejected_play_leaves_the_element_paused() {
        let mut fx = fixture();
        fx.media_host.reject(fx.media[0]);
        fx.engine
            .reset(&mut fx.page, &mut fx.media_host, &mut fx.viewport, false);

        fx.engine
            .on_intersection(&mut fx.page, &mut fx.media_host, fx.media[0], true);
        assert!(fx.page.playback(fx.media[0]).expect("known").is_paused());
        // The request was issued, then discarded.
        assert!(fx
            .media_host
            .commands()
            .contains(&PlaybackCommand::Play(fx.media[0])));
    }

    #[test]
    fn stop_disconnects_and_is_idempotent() {
        let mut fx = fixture();
        fx.engine
            .reset(&mut fx.page, &mut fx.media_host, &mut fx.viewport, false);

        fx.engine.stop();
        fx.engine.stop();
        assert!(!fx.engine.has_tracker());
        assert_eq!(fx.viewport.log().disconnected, 1);
    }

    #[test]
    fn stale_notifications_after_teardown_are_ignored() {
        let mut fx = fixture();
        fx.engine
            .reset(&mut fx.page, &mut fx.media_host, &mut fx.viewport, false);
        fx.engine.stop();
        fx.media_host.clear();

        fx.engine
            .on_intersection(&mut fx.page, &mut fx.media_host, fx.media[0], true);
        assert!(fx.media_host.commands().is_empty());
        assert!(fx.page.playback(fx.media[0]).expect("known").is_paused());
    }

    #[test]
    fn reset_disconnects_the_previous_tracker_first() {
        let mut fx = fixture();
        fx.engine
            .reset(&mut fx.page, &mut fx.media_host, &mut fx.viewport, false);
        fx.engine
            .reset(&mut fx.page, &mut fx.media_host, &mut fx.viewport, false);

        let log = fx.viewport.log();
        assert_eq!(log.created, 2);
        assert_eq!(log.disconnected, 1);
        assert!(fx.engine.has_tracker());
    }
}
