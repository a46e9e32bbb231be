// SPDX-License-Identifier: MPL-2.0
//! `ai_gallery` is a desktop image gallery built with the Iced GUI framework.
//!
//! Images dropped on the window or picked from disk are sent to an analysis
//! service, and the returned title, prompt, format and keywords are shown in
//! a searchable grid. Localization uses Fluent, settings live in a TOML file.

#![doc(html_root_url = "https://docs.rs/ai_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
