// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: analyzed image records, the append-only collection,
//! and the case-insensitive search that derives the filtered view.

mod collection;
mod query;
mod record;

pub use collection::Gallery;
pub use query::SearchQuery;
pub use record::{ImageAnalysis, ImageRecord, KEYWORD_ELLIPSIS};
