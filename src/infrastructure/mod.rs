// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Image analysis over HTTP (implements [`Analyzer`])
//!
//! [`Analyzer`]: crate::application::port::Analyzer

pub mod http;

pub use http::HttpAnalyzer;
