// SPDX-License-Identifier: MPL-2.0
//! Case-insensitive substring search query.

/// A search string, matched case-insensitively as a substring.
///
/// The lowercased needle is computed once so matching a whole gallery does
/// not re-fold the query for every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The query as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// An empty query matches every record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether `text` contains the query, ignoring case.
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        self.needle.is_empty() || text.to_lowercase().contains(&self.needle)
    }
}
