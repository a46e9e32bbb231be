// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! - [`analyzer`]: Remote image analysis
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so implementations can be shared with tasks
//! - No `async fn`: methods return boxed futures that callers hand to Iced's `Task`

pub mod analyzer;

pub use analyzer::{AnalyzeError, AnalyzeFuture, Analyzer};
