// SPDX-License-Identifier: MPL-2.0
//! The page address and its single filter query parameter.
//!
//! Mutation is replace-style by contract: a real host must not create a
//! history entry or trigger a reload when the parameter is rewritten.

use crate::domain::Filter;
use crate::error::Result;
use std::fmt;

/// Query parameter key carrying the filter.
pub const QUERY_KEY: &str = "pub";

/// Page address adapter.
pub trait AddressBar {
    /// Reads the raw value of the filter query parameter.
    fn filter_param(&self) -> Option<String>;

    /// Rewrites the address so the parameter equals `filter`, removing the
    /// parameter entirely for the default filter.
    fn replace_filter_param(&mut self, filter: Filter) -> Result<()>;
}

/// In-memory `path?query#fragment` address.
///
/// Models exactly what the core touches: the query string. Path and
/// fragment pass through rewrites untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAddress {
    path: String,
    params: Vec<(String, String)>,
    fragment: Option<String>,
}

impl PageAddress {
    /// Parses an address of the form `path?key=value&...#fragment`.
    ///
    /// Total over any input: missing query and fragment parts are simply
    /// absent, a pair without `=` becomes a key with an empty value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let (without_fragment, fragment) = match raw.split_once('#') {
            Some((head, frag)) => (head, Some(frag.to_string())),
            None => (raw, None),
        };
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (without_fragment, None),
        };
        let params = query
            .map(|q| {
                q.split('&')
                    .filter(|pair| !pair.is_empty())
                    .map(|pair| match pair.split_once('=') {
                        Some((k, v)) => (k.to_string(), v.to_string()),
                        None => (pair.to_string(), String::new()),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            path: path.to_string(),
            params,
            fragment,
        }
    }

    /// The path part.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The fragment part, without the leading `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Reads a query parameter by key (first occurrence).
    #[must_use]
    pub fn query(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets a query parameter, replacing the first occurrence in place and
    /// dropping any duplicates.
    pub fn set_query(&mut self, key: &str, value: &str) {
        let mut found = false;
        self.params.retain_mut(|(k, v)| {
            if k == key {
                if found {
                    return false;
                }
                found = true;
                *v = value.to_string();
            }
            true
        });
        if !found {
            self.params.push((key.to_string(), value.to_string()));
        }
    }

    /// Removes every occurrence of a query parameter.
    pub fn remove_query(&mut self, key: &str) {
        self.params.retain(|(k, _)| k != key);
    }
}

impl Default for PageAddress {
    fn default() -> Self {
        Self::parse("/")
    }
}

impl fmt::Display for PageAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for (i, (k, v)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            if v.is_empty() {
                write!(f, "{}{}", sep, k)?;
            } else {
                write!(f, "{}{}={}", sep, k, v)?;
            }
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

impl AddressBar for PageAddress {
    fn filter_param(&self) -> Option<String> {
        self.query(QUERY_KEY).map(str::to_string)
    }

    fn replace_filter_param(&mut self, filter: Filter) -> Result<()> {
        if filter.is_default() {
            self.remove_query(QUERY_KEY);
        } else {
            self.set_query(QUERY_KEY, filter.as_str());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_path_query_and_fragment() {
        let address = PageAddress::parse("/publications?pub=featured&page=2#list");
        assert_eq!(address.path(), "/publications");
        assert_eq!(address.query("pub"), Some("featured"));
        assert_eq!(address.query("page"), Some("2"));
        assert_eq!(address.fragment(), Some("list"));
    }

    #[test]
    fn parse_handles_bare_path() {
        let address = PageAddress::parse("/publications");
        assert_eq!(address.path(), "/publications");
        assert_eq!(address.query("pub"), None);
        assert_eq!(address.fragment(), None);
    }

    #[test]
    fn display_round_trips() {
        for raw in [
            "/publications",
            "/publications?pub=featured",
            "/publications?pub=featured&page=2#list",
            "/#top",
        ] {
            assert_eq!(PageAddress::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn set_query_replaces_in_place_and_drops_duplicates() {
        let mut address = PageAddress::parse("/p?a=1&pub=all&b=2&pub=extra");
        address.set_query("pub", "featured");
        assert_eq!(address.to_string(), "/p?a=1&pub=featured&b=2");
    }

    #[test]
    fn remove_query_leaves_other_params_and_fragment() {
        let mut address = PageAddress::parse("/p?a=1&pub=featured#frag");
        address.remove_query("pub");
        assert_eq!(address.to_string(), "/p?a=1#frag");
    }

    #[test]
    fn replace_filter_param_writes_featured() {
        let mut address = PageAddress::parse("/publications");
        address
            .replace_filter_param(Filter::Featured)
            .expect("replace");
        assert_eq!(address.filter_param(), Some("featured".to_string()));
        assert_eq!(address.to_string(), "/publications?pub=featured");
    }

    #[test]
    fn replace_filter_param_removes_key_for_default() {
        let mut address = PageAddress::parse("/publications?pub=featured#pubs");
        address.replace_filter_param(Filter::All).expect("replace");
        assert_eq!(address.filter_param(), None);
        assert_eq!(address.to_string(), "/publications#pubs");
    }

    #[test]
    fn replace_is_idempotent() {
        let mut address = PageAddress::parse("/publications");
        address
            .replace_filter_param(Filter::Featured)
            .expect("replace");
        address
            .replace_filter_param(Filter::Featured)
            .expect("replace");
        assert_eq!(address.to_string(), "/publications?pub=featured");
    }

    #[test]
    fn valueless_pair_parses_as_empty_value() {
        let address = PageAddress::parse("/p?flag&pub=all");
        assert_eq!(address.query("flag"), Some(""));
        assert_eq!(address.to_string(), "/p?flag&pub=all");
    }
}
