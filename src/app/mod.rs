// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery screen, the analyze client,
//! localization, notifications and diagnostics, and translates messages into
//! side effects such as opening the file picker or starting a batch.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::Analyzer;
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector, SubmissionSource};
use crate::i18n::fluent::I18n;
use crate::infrastructure::HttpAnalyzer;
use crate::media::DropCollector;
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    /// `None` when the HTTP client could not be built.
    analyzer: Option<Arc<dyn Analyzer>>,
    theme_mode: ThemeMode,
    drops: DropCollector,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    diagnostics_out: Option<PathBuf>,
    spinner_rotation: f32,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.gallery.gallery().len())
            .field("loading", &self.gallery.is_loading())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        // Close goes through `Message::WindowCloseRequested` to export diagnostics.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application from its parts.
    pub fn with_analyzer(
        i18n: I18n,
        config: &Config,
        analyzer: Option<Arc<dyn Analyzer>>,
        diagnostics_out: Option<PathBuf>,
    ) -> Self {
        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            i18n,
            gallery: gallery::State::new(
                config.upload.batch_policy,
                config.gallery.grid_columns(),
                config.gallery.keyword_preview(),
            ),
            analyzer,
            theme_mode: config.general.theme_mode,
            drops: DropCollector::new(),
            notifications,
            diagnostics,
            diagnostics_out,
            spinner_rotation: 0.0,
            last_tick: None,
        }
    }

    /// Loads the config, builds the HTTP client and submits CLI files.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let endpoint = flags
            .endpoint
            .clone()
            .unwrap_or_else(|| config.service.endpoint.clone());
        let (analyzer, client_error) = match HttpAnalyzer::new(endpoint, config.service.timeout()) {
            Ok(client) => (Some(Arc::new(client) as Arc<dyn Analyzer>), None),
            Err(err) => {
                eprintln!("Failed to build HTTP client: {err}");
                (None, Some(err))
            }
        };

        let mut app = Self::with_analyzer(i18n, &config, analyzer, flags.diagnostics_out);

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if client_error.is_some() {
            app.notifications
                .push(Notification::error("notification-client-init-error"));
        }

        let task = if flags.files.is_empty() {
            Task::none()
        } else {
            let mut ctx = app.update_context();
            update::submit_files(&mut ctx, flags.files, SubmissionSource::CommandLine)
        };
        app.diagnostics.process_pending();

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            gallery: &mut self.gallery,
            analyzer: self.analyzer.as_ref(),
            drops: &mut self.drops,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
            diagnostics_out: self.diagnostics_out.as_deref(),
            spinner_rotation: &mut self.spinner_rotation,
            last_tick: &mut self.last_tick,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.gallery.is_loading(),
                !self.drops.is_empty(),
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        let task = match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::FileHovered => update::handle_file_hovered(&mut ctx, true),
            Message::FilesHoveredLeft => update::handle_file_hovered(&mut ctx, false),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path, Instant::now()),
            Message::PickerClosed(paths) => update::handle_picker_closed(&mut ctx, paths),
            Message::BatchFinished(report) => update::handle_batch_finished(&mut ctx, &report),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::WindowCloseRequested(_) => update::handle_window_close(&mut ctx),
        };

        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            notifications: &self.notifications,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
