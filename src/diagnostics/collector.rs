// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Handles send through a bounded channel so logging never blocks the UI
//! thread; the collector drains the channel on each tick.

use std::path::Path;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::export::write_atomic;
use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport,
    SubmissionSource,
};
use crate::application::BatchReport;

/// Channel capacity for event buffering between ticks.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Events are dropped when the channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    pub fn log_submission(&self, source: SubmissionSource, accepted: usize, rejected: usize) {
        self.log(DiagnosticEventKind::FilesSubmitted {
            source,
            accepted,
            rejected,
        });
    }

    pub fn log_search(&self, query_len: usize, matches: usize) {
        self.log(DiagnosticEventKind::SearchApplied { query_len, matches });
    }

    pub fn log_warning(&self, message: impl Into<String>) {
        self.log(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        self.log(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Wall-clock start, for report metadata.
    collection_started_at: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer. Call on each UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Buffers an event directly, after anything already queued.
    ///
    /// Bypasses the channel, so it never drops on a full queue.
    pub fn record(&mut self, kind: DiagnosticEventKind) {
        self.process_pending();
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    /// Records one `AnalyzeFailed` per failed file followed by a `BatchCompleted`.
    pub fn record_batch(&mut self, report: &BatchReport, committed: usize) {
        for (upload, err) in report.failures() {
            self.record(DiagnosticEventKind::AnalyzeFailed {
                file: upload.file_name(),
                error_kind: err.kind().to_string(),
                message: err.to_string(),
            });
        }
        self.record(DiagnosticEventKind::BatchCompleted {
            succeeded: report.succeeded(),
            failed: report.failed(),
            committed,
            duration_ms: u64::try_from(report.elapsed().as_millis()).unwrap_or(u64::MAX),
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Snapshot of the buffered events as a report.
    #[must_use]
    pub fn report(&self) -> DiagnosticReport {
        DiagnosticReport {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            collection_started_at: self.collection_started_at,
            event_count: self.buffer.len(),
            events: self.buffer.iter().cloned().collect(),
        }
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.report())
    }

    /// Drains pending events and writes the report to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error`] if serialization or the write fails.
    pub fn export_to_file(&mut self, path: impl AsRef<Path>) -> crate::error::Result<()> {
        self.process_pending();
        let json = self.export_json()?;
        write_atomic(path.as_ref(), &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::AnalyzeError;
    use crate::application::FileOutcome;
    use crate::domain::gallery::{ImageAnalysis, ImageRecord};
    use crate::media::ImageUpload;
    use std::path::PathBuf;
    use std::time::Duration;

    fn collector() -> DiagnosticsCollector {
        DiagnosticsCollector::new(BufferCapacity::new(100))
    }

    fn upload(name: &str) -> ImageUpload {
        ImageUpload::from_path(PathBuf::from(format!("/photos/{name}"))).expect("image path")
    }

    #[test]
    fn events_are_buffered_only_after_processing() {
        let mut collector = collector();
        let handle = collector.handle();
        handle.log_warning("first");
        handle.log_search(3, 1);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = collector();
        let handle = collector.handle();
        for i in 0..(DEFAULT_CHANNEL_CAPACITY + 20) {
            handle.log_warning(format!("warning {i}"));
        }
        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn batch_logs_failures_by_file_name_then_summary() {
        let mut collector = collector();
        let record = ImageRecord::from_analysis(
            PathBuf::from("/photos/cat.png"),
            ImageAnalysis {
                title: "Cat".to_string(),
                prompt: String::new(),
                format: "PNG".to_string(),
                keywords: Vec::new(),
            },
        );
        let report = BatchReport::new(
            vec![
                FileOutcome {
                    upload: upload("cat.png"),
                    result: Ok(record),
                },
                FileOutcome {
                    upload: upload("dog.png"),
                    result: Err(AnalyzeError::Timeout),
                },
            ],
            Duration::from_millis(42),
        );

        collector.record_batch(&report, 0);

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::AnalyzeFailed {
                    file: "dog.png".to_string(),
                    error_kind: "timeout".to_string(),
                    message: "Request timed out".to_string(),
                },
                DiagnosticEventKind::BatchCompleted {
                    succeeded: 1,
                    failed: 1,
                    committed: 0,
                    duration_ms: 42,
                },
            ]
        );
    }

    #[test]
    fn large_failed_batch_is_recorded_in_full() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let outcomes = (0..150)
            .map(|i| FileOutcome {
                upload: upload(&format!("img{i}.png")),
                result: Err(AnalyzeError::Rejected { status: 500 }),
            })
            .collect();
        let report = BatchReport::new(outcomes, Duration::from_millis(5));

        collector.record_batch(&report, 0);

        let failed = collector
            .iter()
            .filter(|e| matches!(e.kind, DiagnosticEventKind::AnalyzeFailed { .. }))
            .count();
        assert_eq!(failed, 150);
        assert!(matches!(
            collector.iter().last().map(|e| &e.kind),
            Some(DiagnosticEventKind::BatchCompleted { failed: 150, .. })
        ));
    }

    #[test]
    fn recorded_events_follow_queued_ones() {
        let mut collector = collector();
        collector.handle().log_warning("queued");
        collector.record(DiagnosticEventKind::Error {
            message: "direct".to_string(),
        });

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Warning {
                    message: "queued".to_string()
                },
                DiagnosticEventKind::Error {
                    message: "direct".to_string()
                },
            ]
        );
    }

    #[test]
    fn export_to_file_writes_valid_json_report() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("diagnostics.json");
        let mut collector = collector();
        collector
            .handle()
            .log_submission(SubmissionSource::DragDrop, 2, 1);

        collector.export_to_file(&path).expect("export");

        let content = std::fs::read_to_string(&path).expect("read report");
        let report: DiagnosticReport = serde_json::from_str(&content).expect("valid json");
        assert_eq!(report.event_count, 1);
        assert_eq!(report.app_version, env!("CARGO_PKG_VERSION"));
        assert!(!dir.path().join("diagnostics.json.tmp").exists());
    }
}
