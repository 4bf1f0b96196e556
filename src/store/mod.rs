// SPDX-License-Identifier: MPL-2.0
//! Durable key-value persistence for the active filter.
//!
//! The store is a cache of the in-memory filter, not a source of truth:
//! every adapter is allowed to fail, and the controller discards those
//! failures by contract. Adapters hand back the raw stored string; turning
//! it into a [`crate::domain::Filter`] is the controller's job, so an
//! adapter never has to understand filter values.

pub mod file;

pub use file::FileStore;

use crate::error::{Error, Result};

/// Client key-value store adapter.
pub trait FilterStore {
    /// Reads the stored filter value, `None` when nothing is stored.
    fn load(&self) -> Result<Option<String>>;

    /// Writes the filter's canonical string.
    fn save(&mut self, value: &str) -> Result<()>;
}

/// In-memory store for hosts without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a value, as if a previous session wrote it.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl FilterStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<()> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// A store that is present but unusable (disabled storage, exceeded quota).
///
/// Every operation fails; the controller must keep working regardless.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl FilterStore for UnavailableStore {
    fn load(&self) -> Result<Option<String>> {
        Err(Error::Store("store unavailable".to_string()))
    }

    fn save(&mut self, _value: &str) -> Result<()> {
        Err(Error::Store("store unavailable".to_string()))
    }
}
