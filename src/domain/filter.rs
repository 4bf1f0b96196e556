// SPDX-License-Identifier: MPL-2.0
//! The binary display filter and its total normalization.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The binary display mode for publication cards.
///
/// Exactly one filter is active per controller at any time. Externally
/// supplied values (query parameter, stored value, control clicks) pass
/// through [`Filter::normalize`] before they become active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every card is shown.
    #[default]
    All,
    /// Only cards flagged as featured are shown.
    Featured,
}

impl Filter {
    /// Normalizes arbitrary input into a valid filter.
    ///
    /// Total over any string: exactly `"featured"` maps to [`Filter::Featured`],
    /// everything else (including the empty string) maps to [`Filter::All`].
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        if raw == "featured" {
            Self::Featured
        } else {
            Self::All
        }
    }

    /// Canonical string form, as persisted and as carried in the query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Featured => "featured",
        }
    }

    /// Returns true for the default filter.
    #[must_use]
    pub fn is_default(self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns true when only featured cards are shown.
    #[must_use]
    pub fn is_featured(self) -> bool {
        matches!(self, Self::Featured)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}
