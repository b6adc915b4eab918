//! Path patterns for mapping rules.
//!
//! A pattern names either a single repository path or that path plus its
//! entire subtree:
//!
//! - `/app/public` matches exactly `/app/public`
//! - `/app/public{,/**/*}` matches `/app/public` and everything nested
//!   under it
//!
//! The subtree suffix is parsed once at construction into a boolean flag,
//! so matching never re-parses the pattern string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Glob suffix meaning "this node or any descendant".
pub const SUBTREE_SUFFIX: &str = "{,/**/*}";

/// Parsed mapping-rule pattern.
///
/// Invariants:
/// - `base` carries no trailing slash (except the bare root `/`)
/// - the subtree suffix is stored as a flag, never as part of `base`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPattern {
    base: String,
    matches_subtree: bool,
}

impl PathPattern {
    /// Parse a pattern string. Never fails: any string is a valid base
    /// path, with or without the subtree suffix.
    pub fn parse(raw: &str) -> Self {
        let (base, matches_subtree) = match raw.strip_suffix(SUBTREE_SUFFIX) {
            Some(stripped) => (stripped, true),
            None => (raw, false),
        };
        // `/path/` and `/path` name the same node; the bare root stays `/`
        let base = if base.len() > 1 {
            base.strip_suffix('/').unwrap_or(base)
        } else {
            base
        };
        Self {
            base: base.to_owned(),
            matches_subtree,
        }
    }

    /// The base path without the subtree suffix.
    #[inline]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Whether the pattern also matches descendants of the base path.
    #[inline]
    pub fn matches_subtree(&self) -> bool {
        self.matches_subtree
    }

    /// Check if the pattern matches a repository path.
    #[inline]
    pub fn matches(&self, path: &str) -> bool {
        self.suffix_of(path).is_some()
    }

    /// The remainder of `path` after the base path.
    ///
    /// Returns `Some("")` for an exact match, `Some("/rest")` for a
    /// descendant of a subtree pattern, and `None` when the pattern does
    /// not match. The base must be a whole-segment prefix: `/path` never
    /// matches `/pathology`.
    pub fn suffix_of<'a>(&self, path: &'a str) -> Option<&'a str> {
        let rest = path.strip_prefix(self.base.as_str())?;
        if rest.is_empty() {
            return Some(rest);
        }
        if self.matches_subtree && (rest.starts_with('/') || self.base.ends_with('/')) {
            return Some(rest);
        }
        None
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        if self.matches_subtree {
            f.write_str(SUBTREE_SUFFIX)?;
        }
        Ok(())
    }
}

impl From<&str> for PathPattern {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl Serialize for PathPattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PathPattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
