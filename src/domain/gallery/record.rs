// SPDX-License-Identifier: MPL-2.0
//! Analyzed image records.

use super::SearchQuery;
use std::path::{Path, PathBuf};

/// Marker appended after the keyword preview, whatever the keyword count.
pub const KEYWORD_ELLIPSIS: &str = "...";

/// Descriptive metadata returned by the analyze service, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAnalysis {
    pub title: String,
    pub prompt: String,
    pub format: String,
    pub keywords: Vec<String>,
}

/// One analyzed image held by the gallery.
///
/// Records are immutable once created; the gallery only ever appends them
/// or drops all of them at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    source: PathBuf,
    title: String,
    prompt: String,
    format: String,
    keywords: Vec<String>,
}

impl ImageRecord {
    /// Combines an analysis with the path used to display the original file.
    #[must_use]
    pub fn from_analysis(source: PathBuf, analysis: ImageAnalysis) -> Self {
        Self {
            source,
            title: analysis.title,
            prompt: analysis.prompt,
            format: analysis.format,
            keywords: analysis.keywords,
        }
    }

    /// Path of the uploaded file, used as the preview handle.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether the title or any keyword contains the query, ignoring case.
    #[must_use]
    pub fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.title) || self.keywords.iter().any(|k| query.matches_text(k))
    }

    /// First `limit` keywords joined by `", "`, always followed by `...`.
    #[must_use]
    pub fn keyword_preview(&self, limit: usize) -> String {
        let shown: Vec<&str> = self
            .keywords
            .iter()
            .take(limit)
            .map(String::as_str)
            .collect();
        format!("{}{KEYWORD_ELLIPSIS}", shown.join(", "))
    }
}
