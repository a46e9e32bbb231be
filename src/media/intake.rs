// SPDX-License-Identifier: MPL-2.0
//! Collection of files submitted by drag-and-drop, the file picker, or the CLI.
//!
//! The native window reports one `FileDropped` event per file, so a multi-file
//! drop arrives as a burst of events. [`DropCollector`] buffers the burst and
//! releases it as one batch once no further drop arrived for [`DROP_SETTLE`].

use super::{is_image_media_type, media_type_for_path};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Quiet period after the last drop before the buffered files form a batch.
pub const DROP_SETTLE: Duration = Duration::from_millis(150);

/// An image file accepted for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    path: PathBuf,
    media_type: &'static str,
}

impl ImageUpload {
    /// Accepts the path if its media type is an image type.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let media_type = media_type_for_path(&path)?;
        if !is_image_media_type(media_type) {
            return None;
        }
        Some(Self { path, media_type })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn media_type(&self) -> &'static str {
        self.media_type
    }

    /// File name sent alongside the multipart payload.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    }
}

/// Result of filtering a submission down to its image files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Intake {
    /// Accepted images, in submission order.
    pub accepted: Vec<ImageUpload>,
    /// Number of entries silently dropped (directories, non-image files).
    pub rejected: usize,
}

impl Intake {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

/// Filters submitted paths to image files, keeping submission order.
pub fn select_images<I>(paths: I) -> Intake
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut intake = Intake::default();
    for path in paths {
        if path.is_dir() {
            intake.rejected += 1;
            continue;
        }
        match ImageUpload::from_path(path) {
            Some(upload) => intake.accepted.push(upload),
            None => intake.rejected += 1,
        }
    }
    intake
}

/// Buffers per-file drop events until the drop burst is over.
#[derive(Debug, Default)]
pub struct DropCollector {
    pending: Vec<PathBuf>,
    last_drop: Option<Instant>,
}

impl DropCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one dropped path.
    pub fn push(&mut self, path: PathBuf, now: Instant) {
        self.pending.push(path);
        self.last_drop = Some(now);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Releases the buffered paths if the settle period has elapsed.
    pub fn take_if_settled(&mut self, now: Instant) -> Option<Vec<PathBuf>> {
        let last_drop = self.last_drop?;
        if now.saturating_duration_since(last_drop) < DROP_SETTLE {
            return None;
        }
        Some(self.take())
    }

    /// Releases the buffered paths unconditionally.
    pub fn take(&mut self) -> Vec<PathBuf> {
        self.last_drop = None;
        std::mem::take(&mut self.pending)
    }
}
