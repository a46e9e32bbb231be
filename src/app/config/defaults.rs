// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Grid layout bounds live with their newtypes in [`crate::domain::ui`];
//! they are re-exported here so every default can be found in one place.

pub use crate::domain::ui::newtypes::{grid_columns_bounds, keyword_preview_bounds};

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Endpoint of the local analyze-image service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/analyze-image";

/// Per-request timeout in seconds. `0` disables the timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Upper bound for the per-request timeout (one hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

pub const DEFAULT_GRID_COLUMNS: usize = grid_columns_bounds::DEFAULT;

pub const DEFAULT_KEYWORD_PREVIEW: usize = keyword_preview_bounds::DEFAULT;

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
    assert!(DEFAULT_GRID_COLUMNS >= grid_columns_bounds::MIN);
    assert!(DEFAULT_GRID_COLUMNS <= grid_columns_bounds::MAX);
    assert!(DEFAULT_KEYWORD_PREVIEW >= keyword_preview_bounds::MIN);
    assert!(DEFAULT_KEYWORD_PREVIEW <= keyword_preview_bounds::MAX);
};
