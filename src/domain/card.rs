// SPDX-License-Identifier: MPL-2.0
//! Publication cards.

/// Identifier of a card within its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(pub(crate) usize);

/// One publication entry in the rendered element set.
///
/// `featured` comes from the markup and never changes; `hidden` is mutated
/// only by the presentation synchronizer as a pure function of the active
/// filter.
#[derive(Debug, Clone)]
pub struct Card {
    id: CardId,
    featured: bool,
    hidden: bool,
}

impl Card {
    pub(crate) fn new(id: CardId, featured: bool) -> Self {
        Self {
            id,
            featured,
            hidden: false,
        }
    }

    /// This card's identifier.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Whether the markup flags this card as featured.
    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.featured
    }

    /// Whether the card is currently hidden from the page.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_starts_visible() {
        let card = Card::new(CardId(0), true);
        assert!(!card.is_hidden());
        assert!(card.is_featured());
    }

    #[test]
    fn set_hidden_updates_visibility() {
        let mut card = Card::new(CardId(1), false);
        card.set_hidden(true);
        assert!(card.is_hidden());
        card.set_hidden(false);
        assert!(!card.is_hidden());
    }
}
