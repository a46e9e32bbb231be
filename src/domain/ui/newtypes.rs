// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for gallery layout values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Grid Columns
// =============================================================================

/// Grid column bounds.
pub mod grid_columns_bounds {
    pub const MIN: usize = 1;
    pub const MAX: usize = 6;
    pub const DEFAULT: usize = 3;
}

/// Number of cards per gallery row, guaranteed to be within 1–6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumns(usize);

impl GridColumns {
    /// Creates a column count, clamping the value to the valid range.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self(columns.clamp(grid_columns_bounds::MIN, grid_columns_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for GridColumns {
    fn default() -> Self {
        Self(grid_columns_bounds::DEFAULT)
    }
}

// =============================================================================
// Keyword Preview
// =============================================================================

/// Keyword preview bounds.
pub mod keyword_preview_bounds {
    pub const MIN: usize = 1;
    pub const MAX: usize = 20;
    pub const DEFAULT: usize = 5;
}

/// How many keywords a gallery card lists before the ellipsis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordPreview(usize);

impl KeywordPreview {
    /// Creates a preview length, clamping the value to the valid range.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self(count.clamp(keyword_preview_bounds::MIN, keyword_preview_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for KeywordPreview {
    fn default() -> Self {
        Self(keyword_preview_bounds::DEFAULT)
    }
}
