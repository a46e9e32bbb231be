// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`batch`]: Concurrent analysis of one submitted batch and its commit policy
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services

pub mod batch;
pub mod port;

pub use batch::{analyze_batch, BatchPolicy, BatchReport, FileOutcome};
