//! Content-type to syntax-mode resolution.
//!
//! A [`ModeMap`] is an ordered sequence of substring patterns, each selecting
//! a syntax-mode identifier. Declaration order is priority: the first pattern
//! that occurs anywhere in the content-type string wins, even when a later
//! pattern would be a more specific match. Callers rely on that ordering, so
//! it is part of the contract.

use smol_str::SmolStr;

/// One entry of a [`ModeMap`]: a substring pattern and the mode it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeMapping {
    /// Substring searched for in the content-type value.
    pub pattern: SmolStr,
    /// Mode identifier activated on a match (bare, without any widget prefix).
    pub mode: SmolStr,
}

impl ModeMapping {
    /// Create a mapping from a pattern to a mode identifier.
    pub fn new(pattern: impl Into<SmolStr>, mode: impl Into<SmolStr>) -> Self {
        Self {
            pattern: pattern.into(),
            mode: mode.into(),
        }
    }
}

/// Ordered content-type to mode mapping, immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeMap {
    entries: Vec<ModeMapping>,
}

impl ModeMap {
    /// Build a map from mappings in priority order.
    pub fn new(entries: Vec<ModeMapping>) -> Self {
        Self { entries }
    }

    /// A map with no entries; `resolve` always returns `None`.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of mappings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no mappings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The mappings in declaration order.
    pub fn mappings(&self) -> &[ModeMapping] {
        &self.entries
    }

    /// Resolve a content-type string to a mode identifier.
    ///
    /// Returns the mode of the first mapping whose pattern occurs anywhere in
    /// `content_type`, or `None` when nothing matches.
    pub fn resolve(&self, content_type: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|m| content_type.contains(m.pattern.as_str()))
            .map(|m| m.mode.as_str())
    }
}

impl Default for ModeMap {
    /// The stock mapping: javascript, HTML and CSS content types.
    fn default() -> Self {
        Self::new(vec![
            ModeMapping::new("javascript", "javascript"),
            ModeMapping::new("text/html", "html"),
            ModeMapping::new("text/css", "css"),
        ])
    }
}
