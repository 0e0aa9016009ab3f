// SPDX-License-Identifier: MPL-2.0
//! Custom widgets for carousel rendering.

pub mod animated_spinner;

pub use animated_spinner::AnimatedSpinner;
