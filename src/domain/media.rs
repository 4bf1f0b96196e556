// SPDX-License-Identifier: MPL-2.0
//! Embedded media elements and their playback state machine.

use super::CardId;

/// Identifier of a media element within its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaId(pub(crate) usize);

/// Playback state of one media element.
///
/// Two states only; transitions are idempotent and evaluated by the
/// visibility engine whenever card visibility, viewport intersection, or the
/// reduced-motion preference changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// The element is not playing.
    #[default]
    Paused,
    /// The host accepted a playback start request.
    Playing,
}

impl PlaybackState {
    /// Returns true if the element is playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the element is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }
}

/// An embedded video or animation, owned by at most one card.
///
/// An element with no enclosing card is never considered visible and
/// therefore never plays.
#[derive(Debug, Clone)]
pub struct MediaElement {
    id: MediaId,
    card: Option<CardId>,
    playback: PlaybackState,
}

impl MediaElement {
    pub(crate) fn new(id: MediaId, card: Option<CardId>) -> Self {
        Self {
            id,
            card,
            playback: PlaybackState::default(),
        }
    }

    /// This element's identifier.
    #[must_use]
    pub fn id(&self) -> MediaId {
        self.id
    }

    /// The nearest enclosing card, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        self.card
    }

    /// Current playback state.
    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub(crate) fn set_playback(&mut self, state: PlaybackState) {
        self.playback = state;
    }
}
