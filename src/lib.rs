// SPDX-License-Identifier: MPL-2.0
//! `pubdeck` keeps a publication page's "all"/"featured" filter consistent
//! across in-memory state, a durable key-value store, and the page address,
//! and plays embedded media only while it is shown, on screen, and allowed
//! by the host's reduced-motion preference.
//!
//! The crate is headless: the rendered element set is mirrored by a
//! [`page::Page`] model, while playback, viewport tracking, persistence,
//! and the motion-preference signal are reached through traits. The same
//! core runs against a real host or the doubles in [`test_utils`].
//!
//! Typical wiring for one page lifecycle:
//!
//! ```
//! use pubdeck::address::PageAddress;
//! use pubdeck::controller::{Hosts, PageController};
//! use pubdeck::motion::StaticMotion;
//! use pubdeck::page::Page;
//! use pubdeck::playback::NoViewport;
//! use pubdeck::store::MemoryStore;
//! use pubdeck::test_utils::RecordingMediaHost;
//!
//! let mut page = Page::new();
//! page.add_button("all");
//! page.add_button("featured");
//! let card = page.add_card(true);
//! page.add_media(card);
//!
//! let hosts = Hosts {
//!     store: Box::new(MemoryStore::new()),
//!     address: Box::new(PageAddress::parse("/publications?pub=featured")),
//!     media: Box::new(RecordingMediaHost::new()),
//!     viewport: Box::new(NoViewport),
//!     motion: Box::new(StaticMotion::default()),
//! };
//! let mut controller = PageController::new(page, hosts);
//! controller.init();
//! assert!(controller.active_filter().is_featured());
//! ```

pub mod address;
pub mod controller;
pub mod domain;
pub mod error;
pub mod motion;
pub mod page;
pub mod playback;
pub mod store;
pub mod test_utils;

pub use controller::{event_channel, ApplyOptions, Event, FilterHandle, Hosts, PageController};
pub use domain::{Filter, PlaybackState};
pub use error::{Error, Result};
