// SPDX-License-Identifier: MPL-2.0
//! User interface elements and shared visual infrastructure.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`image`] - The slide image element with its load lifecycle
//! - [`classes`] - Marker classes elements attach to their roots
//! - [`styles`] - Centralized styling resolved from marker classes
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`widgets`] - Custom Iced widgets (animated spinner)

pub mod classes;
pub mod design_tokens;
pub mod image;
pub mod styles;
pub mod widgets;
