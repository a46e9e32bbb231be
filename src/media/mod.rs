// SPDX-License-Identifier: MPL-2.0
//! File intake: media type detection and batching of user-submitted files.
//!
//! Only files whose media type starts with `image/` are ever handed to the
//! analyze service. The media type is derived from the file extension.

pub mod intake;

use std::path::Path;

pub use extensions::IMAGE_EXTENSIONS;
pub use intake::{select_images, DropCollector, ImageUpload, Intake, DROP_SETTLE};

/// Prefix shared by every media type accepted for upload.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Supported media extensions
pub mod extensions {
    /// Image file extensions offered in the file picker.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "ico", "svg", "avif", "heic",
    ];
}

/// Extension to media type table. Lookups are done on the lowercased extension.
const MEDIA_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("ico", "image/x-icon"),
    ("svg", "image/svg+xml"),
    ("avif", "image/avif"),
    ("heic", "image/heic"),
    ("mp4", "video/mp4"),
    ("mov", "video/quicktime"),
    ("webm", "video/webm"),
    ("mp3", "audio/mpeg"),
    ("txt", "text/plain"),
    ("json", "application/json"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
];

/// Returns the media type registered for an extension, if any.
#[must_use]
pub fn media_type_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    MEDIA_TYPES
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, media_type)| *media_type)
}

/// Returns the media type of a path based on its extension.
#[must_use]
pub fn media_type_for_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(media_type_for_extension)
}

/// Whether a media type designates an image.
#[must_use]
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_MEDIA_PREFIX)
}
