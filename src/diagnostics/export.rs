// SPDX-License-Identifier: MPL-2.0
//! JSON report format and atomic file writing.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEvent;

/// Exported diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub app_version: String,
    pub generated_at: DateTime<Utc>,
    pub collection_started_at: DateTime<Utc>,
    pub event_count: usize,
    pub events: Vec<DiagnosticEvent>,
}

/// Writes `content` to a sibling temp file, then renames it over `path`.
///
/// # Errors
///
/// Returns an I/O error if the write or rename fails. The temp file is
/// removed if the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}
