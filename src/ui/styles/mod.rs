// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all carousel widgets.

pub mod container;
pub mod overlay;

pub use container::for_markers;
