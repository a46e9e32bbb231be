// SPDX-License-Identifier: MPL-2.0
//! The append-only gallery and its filtered view.

use super::{ImageRecord, SearchQuery};

/// Ordered collection of analyzed images plus the currently displayed subset.
///
/// The filtered view is stored as ascending indices into `records`, so it is
/// always a subsequence of the gallery in the same relative order.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    records: Vec<ImageRecord>,
    view: Vec<usize>,
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends records in order and resets the view to the whole gallery.
    ///
    /// Returns the number of records appended.
    pub fn append<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = ImageRecord>,
    {
        let before = self.records.len();
        self.records.extend(records);
        self.show_all();
        self.records.len() - before
    }

    /// Recomputes the view from `query`.
    pub fn search(&mut self, query: &SearchQuery) {
        self.view = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.matches(query))
            .map(|(index, _)| index)
            .collect();
    }

    /// Resets the view to every record.
    pub fn show_all(&mut self) {
        self.view = (0..self.records.len()).collect();
    }

    /// Drops every record.
    pub fn reset(&mut self) {
        self.records.clear();
        self.view.clear();
    }

    /// Records in the current view, in gallery order.
    pub fn filtered(&self) -> impl Iterator<Item = &ImageRecord> {
        self.view.iter().filter_map(|&index| self.records.get(index))
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.view.len()
    }
}
