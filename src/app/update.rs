// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] of mutable borrows into `App` so
//! they stay free functions that tests can drive directly.

use super::Message;
use crate::application::{analyze_batch, port::Analyzer, BatchReport};
use crate::diagnostics::{DiagnosticsCollector, SubmissionSource};
use crate::i18n::fluent::I18n;
use crate::media::{select_images, DropCollector, IMAGE_EXTENSIONS};
use crate::ui::gallery::{self, Effect};
use crate::ui::notifications::{self, Notification};
use crate::ui::widgets::animated_spinner;
use iced::Task;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a mut gallery::State,
    pub analyzer: Option<&'a Arc<dyn Analyzer>>,
    pub drops: &'a mut DropCollector,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub diagnostics_out: Option<&'a Path>,
    pub spinner_rotation: &'a mut f32,
    pub last_tick: &'a mut Option<Instant>,
}

pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    let (effect, task) = ctx.gallery.handle_message(message);
    let task = task.map(Message::Gallery);

    match effect {
        Effect::None => task,
        Effect::OpenPicker => Task::batch([task, open_picker(ctx.i18n.tr("picker-filter-name"))]),
        Effect::Searched { query_len, matches } => {
            ctx.diagnostics.handle().log_search(query_len, matches);
            task
        }
    }
}

/// Opens the native multi-file picker filtered to image extensions.
fn open_picker(filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, IMAGE_EXTENSIONS)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .into_iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
        },
        Message::PickerClosed,
    )
}

pub fn handle_file_hovered(ctx: &mut UpdateContext<'_>, hovered: bool) -> Task<Message> {
    ctx.gallery.set_drag_active(hovered);
    Task::none()
}

pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf, now: Instant) -> Task<Message> {
    ctx.gallery.set_drag_active(false);
    ctx.drops.push(path, now);
    Task::none()
}

pub fn handle_picker_closed(ctx: &mut UpdateContext<'_>, paths: Option<Vec<PathBuf>>) -> Task<Message> {
    match paths {
        Some(paths) => submit_files(ctx, paths, SubmissionSource::FileDialog),
        None => Task::none(),
    }
}

/// Filters `paths` to images and starts one analyze batch.
///
/// A batch without images is a no-op: no loading state, no request.
pub fn submit_files(
    ctx: &mut UpdateContext<'_>,
    paths: Vec<PathBuf>,
    source: SubmissionSource,
) -> Task<Message> {
    let intake = select_images(paths);
    ctx.diagnostics
        .handle()
        .log_submission(source, intake.accepted.len(), intake.rejected);

    if intake.is_empty() {
        return Task::none();
    }

    let Some(analyzer) = ctx.analyzer.map(Arc::clone) else {
        ctx.notifications
            .push(Notification::error("notification-client-init-error"));
        return Task::none();
    };

    ctx.gallery.begin_batch();
    let uploads = intake.accepted;
    Task::perform(
        async move { analyze_batch(&*analyzer, uploads).await },
        Message::BatchFinished,
    )
}

pub fn handle_batch_finished(ctx: &mut UpdateContext<'_>, report: &BatchReport) -> Task<Message> {
    let summary = ctx.gallery.finish_batch(report);

    for (upload, err) in report.failures() {
        eprintln!("Failed to analyze {}: {}", upload.file_name(), err);
    }
    ctx.diagnostics.record_batch(report, summary.committed);

    if summary.error.is_none() && summary.committed > 0 {
        ctx.notifications.push(
            Notification::success("notification-batch-success")
                .with_arg("count", summary.committed.to_string()),
        );
    }
    Task::none()
}

/// Flushes settled drops, expires toasts and advances the spinner.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);

    if ctx.gallery.is_loading() {
        if let Some(last) = *ctx.last_tick {
            *ctx.spinner_rotation = animated_spinner::advance(
                *ctx.spinner_rotation,
                now.saturating_duration_since(last),
            );
        }
    }
    *ctx.last_tick = Some(now);

    match ctx.drops.take_if_settled(now) {
        Some(paths) => submit_files(ctx, paths, SubmissionSource::DragDrop),
        None => Task::none(),
    }
}

/// Writes the diagnostics report if requested, then exits.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(path) = ctx.diagnostics_out {
        if let Err(err) = ctx.diagnostics.export_to_file(path) {
            eprintln!("Failed to write diagnostics to {}: {}", path.display(), err);
        }
    }
    iced::exit()
}
