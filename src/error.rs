// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors from the best-effort persistence channels.
///
/// The controller treats both channels as caches and deliberately discards
/// these errors at the call site.
#[derive(Debug, Clone)]
pub enum Error {
    /// The key-value store could not be read or written.
    Store(String),
    /// The page address could not be read or rewritten.
    Address(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(e) => write!(f, "Store Error: {}", e),
            Error::Address(e) => write!(f, "Address Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Store(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Store(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Store(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
