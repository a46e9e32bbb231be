// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Drop zone, search bar and the grid of analyzed images
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
