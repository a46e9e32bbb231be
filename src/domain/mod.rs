// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`gallery`]: Analyzed images and search ([`ImageRecord`](gallery::ImageRecord),
//!   [`Gallery`](gallery::Gallery), [`SearchQuery`](gallery::SearchQuery))
//! - [`ui`]: UI value objects ([`GridColumns`](ui::newtypes::GridColumns),
//!   [`KeywordPreview`](ui::newtypes::KeywordPreview))

pub mod diagnostics;
pub mod gallery;
pub mod ui;
