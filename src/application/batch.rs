// SPDX-License-Identifier: MPL-2.0
//! Concurrent analysis of a batch of uploads.
//!
//! Every file of a batch is analyzed concurrently and its outcome is kept,
//! tagged success or failure, at the file's input position. What the gallery
//! keeps from a batch with failures is decided afterwards by [`BatchPolicy`].

use super::port::{AnalyzeError, Analyzer};
use crate::domain::gallery::ImageRecord;
use crate::media::ImageUpload;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// What to keep from a batch in which some files failed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BatchPolicy {
    /// Keep nothing from a batch unless every file succeeded.
    #[default]
    AllOrNothing,
    /// Keep the files that succeeded, in input order.
    KeepSuccesses,
}

/// Outcome of analyzing one file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub upload: ImageUpload,
    pub result: Result<ImageRecord, AnalyzeError>,
}

/// Per-file outcomes of a batch, in input order.
#[derive(Debug, Clone)]
pub struct BatchReport {
    outcomes: Vec<FileOutcome>,
    elapsed: Duration,
}

impl BatchReport {
    #[must_use]
    pub fn new(outcomes: Vec<FileOutcome>, elapsed: Duration) -> Self {
        Self { outcomes, elapsed }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    /// Failed uploads with their errors, in input order.
    pub fn failures(&self) -> impl Iterator<Item = (&ImageUpload, &AnalyzeError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|err| (&o.upload, err)))
    }

    /// Records the gallery should append under `policy`, in input order.
    #[must_use]
    pub fn committable(&self, policy: BatchPolicy) -> Vec<ImageRecord> {
        if policy == BatchPolicy::AllOrNothing && self.failed() > 0 {
            return Vec::new();
        }
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().cloned())
            .collect()
    }
}

/// Analyzes every upload concurrently and collects the outcomes in input order.
pub async fn analyze_batch<A>(analyzer: &A, uploads: Vec<ImageUpload>) -> BatchReport
where
    A: Analyzer + ?Sized,
{
    let started = Instant::now();
    let pending = uploads.into_iter().map(|upload| {
        let analysis = analyzer.analyze(upload.clone());
        async move {
            let result = analysis
                .await
                .map(|analysis| ImageRecord::from_analysis(upload.path().to_path_buf(), analysis));
            FileOutcome { upload, result }
        }
    });
    let outcomes = join_all(pending).await;
    BatchReport::new(outcomes, started.elapsed())
}
