// SPDX-License-Identifier: MPL-2.0
//! Core domain types: the display filter, cards, and media elements.

pub mod card;
pub mod filter;
pub mod media;

pub use card::{Card, CardId};
pub use filter::Filter;
pub use media::{MediaElement, MediaId, PlaybackState};
