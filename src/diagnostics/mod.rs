// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module: the application's log channel.
//!
//! Events are sent through cheap, cloneable [`DiagnosticsHandle`]s into a
//! bounded channel, drained on the UI tick into a memory-bounded
//! [`CircularBuffer`], and can be exported as a JSON report.
//!
//! # Privacy
//!
//! Only file names (never full paths) and query lengths (never query text)
//! are recorded.

mod buffer;
mod collector;
mod events;
mod export;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, SubmissionSource};
pub use export::{write_atomic, DiagnosticReport};
