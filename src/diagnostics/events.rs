// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a batch of files came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionSource {
    DragDrop,
    FileDialog,
    CommandLine,
}

/// What happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// Files were submitted; `rejected` counts the silently dropped non-images.
    FilesSubmitted {
        source: SubmissionSource,
        accepted: usize,
        rejected: usize,
    },

    /// One file of a batch could not be analyzed.
    AnalyzeFailed {
        file: String,
        error_kind: String,
        message: String,
    },

    /// A batch finished.
    BatchCompleted {
        succeeded: usize,
        failed: usize,
        committed: usize,
        duration_ms: u64,
    },

    /// A search was applied to the gallery.
    SearchApplied { query_len: usize, matches: usize },

    Warning { message: String },

    Error { message: String },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}
