// SPDX-License-Identifier: MPL-2.0
//! Image analysis port definition.
//!
//! This module defines the [`Analyzer`] trait implemented by the HTTP client
//! (and by in-memory fakes in tests).

use crate::domain::gallery::ImageAnalysis;
use crate::media::ImageUpload;
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// AnalyzeError
// =============================================================================

/// Errors that can occur while analyzing one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// The file could not be read from disk.
    Io(String),

    /// The request could not be sent or the response could not be received.
    Network(String),

    /// The request did not complete within the configured timeout.
    Timeout,

    /// The service answered with a non-success status.
    Rejected {
        /// HTTP status code.
        status: u16,
    },

    /// The response body does not match the expected schema.
    InvalidResponse(String),
}

impl AnalyzeError {
    /// Short, stable name of the failure category used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyzeError::Io(_) => "io",
            AnalyzeError::Network(_) => "network",
            AnalyzeError::Timeout => "timeout",
            AnalyzeError::Rejected { .. } => "rejected",
            AnalyzeError::InvalidResponse(_) => "invalid_response",
        }
    }
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeError::Io(msg) => write!(f, "Failed to read image: {msg}"),
            AnalyzeError::Network(msg) => write!(f, "Request failed: {msg}"),
            AnalyzeError::Timeout => write!(f, "Request timed out"),
            AnalyzeError::Rejected { status } => {
                write!(f, "Service rejected the image (HTTP {status})")
            }
            AnalyzeError::InvalidResponse(msg) => write!(f, "Invalid response: {msg}"),
        }
    }
}

impl std::error::Error for AnalyzeError {}

// =============================================================================
// Analyzer
// =============================================================================

/// Future returned by [`Analyzer::analyze`].
pub type AnalyzeFuture = BoxFuture<'static, Result<ImageAnalysis, AnalyzeError>>;

/// Sends one image to an analysis backend and returns its validated metadata.
///
/// The returned future owns everything it needs, so several calls can be
/// awaited concurrently.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, upload: ImageUpload) -> AnalyzeFuture;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        let errors = [
            AnalyzeError::Io(String::new()),
            AnalyzeError::Network(String::new()),
            AnalyzeError::Timeout,
            AnalyzeError::Rejected { status: 500 },
            AnalyzeError::InvalidResponse(String::new()),
        ];
        let mut kinds: Vec<_> = errors.iter().map(AnalyzeError::kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn rejected_display_includes_status() {
        let err = AnalyzeError::Rejected { status: 413 };
        assert_eq!(err.to_string(), "Service rejected the image (HTTP 413)");
    }
}
