// SPDX-License-Identifier: MPL-2.0
//! Presentation synchronizer: idempotent projections of the active filter
//! onto the element set.
//!
//! Both operations are pure functions of the filter over the current
//! elements; no state is retained between calls.

use super::Page;
use crate::domain::Filter;

/// Marks each filter control active (and pressed) iff its associated value
/// equals the filter's canonical string.
///
/// Zero or multiple matching controls are both legal; the synchronizer
/// assumes well-formed markup but does not require uniqueness.
pub fn sync_buttons(page: &mut Page, filter: Filter) {
    for button in page.buttons_mut() {
        let is_active = button.value() == filter.as_str();
        button.set_active(is_active);
    }
}

/// Projects the filter onto card visibility.
///
/// Under [`Filter::All`] every card is shown; under [`Filter::Featured`]
/// exactly the featured cards are shown.
pub fn sync_cards(page: &mut Page, filter: Filter) {
    for card in page.cards_mut() {
        card.set_hidden(filter.is_featured() && !card.is_featured());
    }
}
