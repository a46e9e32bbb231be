// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::BatchReport;
use crate::ui::gallery;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// Files are being dragged over the window.
    FileHovered,
    /// The drag left the window without dropping.
    FilesHoveredLeft,
    /// One file was dropped; drops are grouped into a batch on tick.
    FileDropped(PathBuf),
    /// Result from the file picker (`None` when cancelled).
    PickerClosed(Option<Vec<PathBuf>>),
    /// Every file of a batch has been analyzed.
    BatchFinished(BatchReport),
    /// Periodic tick for drop grouping, toasts and the spinner.
    Tick(Instant),
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Overrides `[service] endpoint` from the config file.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `AI_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Where to write the diagnostics report when the window closes.
    pub diagnostics_out: Option<PathBuf>,
    /// Files submitted as the first batch.
    pub files: Vec<PathBuf>,
}
