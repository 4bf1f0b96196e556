// SPDX-License-Identifier: MPL-2.0
//! In-memory model of the rendered element set the core works against.
//!
//! The markup itself is an external collaborator; this model mirrors exactly
//! the state the core is allowed to query and mutate: filter controls with an
//! active/pressed flag, cards with a hidden flag, and media elements resolved
//! to their nearest enclosing card.

pub mod sync;

use crate::domain::{Card, CardId, MediaElement, MediaId, PlaybackState};

/// A filter control element.
///
/// Carries the raw associated filter value from its markup attribute; the
/// value is not normalized here so a control with an unknown value simply
/// never matches the active filter.
#[derive(Debug, Clone)]
pub struct FilterButton {
    value: String,
    active: bool,
    pressed: bool,
}

impl FilterButton {
    fn new(value: String) -> Self {
        Self {
            value,
            active: false,
            pressed: false,
        }
    }

    /// Raw associated filter value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the control is marked active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pressed-state indicator mirrored to assistive technology.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
        self.pressed = active;
    }
}

/// The current element set.
#[derive(Debug, Clone, Default)]
pub struct Page {
    buttons: Vec<FilterButton>,
    cards: Vec<Card>,
    media: Vec<MediaElement>,
}

impl Page {
    /// An empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter control carrying the given associated value.
    pub fn add_button(&mut self, value: impl Into<String>) {
        self.buttons.push(FilterButton::new(value.into()));
    }

    /// Adds a card; `featured` is fixed by the markup and never changes.
    pub fn add_card(&mut self, featured: bool) -> CardId {
        let id = CardId(self.cards.len());
        self.cards.push(Card::new(id, featured));
        id
    }

    /// Adds a media element nested inside `card`.
    pub fn add_media(&mut self, card: CardId) -> MediaId {
        self.add_media_element(Some(card))
    }

    /// Adds a media element with no enclosing card.
    ///
    /// Such an element is never considered visible, so it never plays.
    pub fn add_detached_media(&mut self) -> MediaId {
        self.add_media_element(None)
    }

    fn add_media_element(&mut self, card: Option<CardId>) -> MediaId {
        let id = MediaId(self.media.len());
        self.media.push(MediaElement::new(id, card));
        id
    }

    /// All filter controls, in document order.
    #[must_use]
    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    /// All cards, in document order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// All media elements, in document order.
    #[must_use]
    pub fn media(&self) -> &[MediaElement] {
        &self.media
    }

    /// Looks up a card by identifier.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    /// Resolves a media element's nearest enclosing card.
    #[must_use]
    pub fn enclosing_card(&self, media: MediaId) -> Option<&Card> {
        self.media
            .get(media.0)
            .and_then(MediaElement::card)
            .and_then(|card| self.card(card))
    }

    /// A media element is visible when its enclosing card exists and is shown.
    #[must_use]
    pub fn is_media_visible(&self, media: MediaId) -> bool {
        self.enclosing_card(media)
            .is_some_and(|card| !card.is_hidden())
    }

    /// Current playback state of a media element.
    #[must_use]
    pub fn playback(&self, media: MediaId) -> Option<PlaybackState> {
        self.media.get(media.0).map(MediaElement::playback)
    }

    pub(crate) fn media_ids(&self) -> Vec<MediaId> {
        self.media.iter().map(MediaElement::id).collect()
    }

    pub(crate) fn set_playback(&mut self, media: MediaId, state: PlaybackState) {
        if let Some(element) = self.media.get_mut(media.0) {
            element.set_playback(state);
        }
    }

    pub(crate) fn buttons_mut(&mut self) -> &mut [FilterButton] {
        &mut self.buttons
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }
}
