// SPDX-License-Identifier: MPL-2.0
//! TOML-backed filter store in the platform data directory.
//!
//! # Path resolution
//!
//! 1. Explicit path via [`FileStore::at_path`] (tests, portable deployments)
//! 2. Platform data directory: `<data_dir>/pubdeck/state.toml`

use super::FilterStore;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const STORE_FILE: &str = "state.toml";
const APP_DIR: &str = "pubdeck";

/// On-disk shape of the store.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredState {
    #[serde(default)]
    publication_filter: Option<String>,
}

/// File-backed [`FilterStore`].
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at the default platform location.
    ///
    /// Returns `None` when the platform reports no data directory; callers
    /// then fall back to a [`super::MemoryStore`] and lose persistence only.
    #[must_use]
    pub fn new() -> Option<Self> {
        dirs::data_dir().map(|mut path| {
            path.push(APP_DIR);
            path.push(STORE_FILE);
            Self { path }
        })
    }

    /// Store at an explicit file path.
    #[must_use]
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FilterStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let state: StoredState = toml::from_str(&content)?;
        Ok(state.publication_filter)
    }

    fn save(&mut self, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let state = StoredState {
            publication_filter: Some(value.to_string()),
        };
        let content = toml::to_string_pretty(&state)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("create temp dir");
        let mut store = FileStore::at_path(dir.path().join("state.toml"));

        store.save("featured").expect("save");
        assert_eq!(store.load().expect("load"), Some("featured".to_string()));

        store.save("all").expect("save");
        assert_eq!(store.load().expect("load"), Some("all".to_string()));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempdir().expect("create temp dir");
        let store = FileStore::at_path(dir.path().join("absent.toml"));
        assert_eq!(store.load().expect("load"), None);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("nested").join("deeply").join("state.toml");
        let mut store = FileStore::at_path(path.clone());

        store.save("featured").expect("save");
        assert!(path.exists());
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("state.toml");
        fs::write(&path, "not = valid = toml").expect("write garbage");

        let store = FileStore::at_path(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn file_without_the_key_loads_as_none() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("state.toml");
        fs::write(&path, "unrelated = 1\n").expect("write file");

        let store = FileStore::at_path(path);
        assert_eq!(store.load().expect("load"), None);
    }

    #[test]
    fn default_location_resolution_does_not_panic() {
        // The platform may or may not report a data directory; either way
        // this must not panic.
        let _store = FileStore::new();
    }
}
