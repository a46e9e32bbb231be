// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. `.ftl` bundles are
//! embedded from `assets/i18n/` at build time.
//!
//! Locale resolution: CLI `--lang`, then the config file, then the OS locale,
//! falling back to `en-US`.

pub mod fluent;
