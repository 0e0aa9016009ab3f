// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a slide-image toolkit built with the Iced GUI framework.
//!
//! It provides an image element with a loading/success/error lifecycle,
//! marker-class styling, carousel-wide spinner coordination, and a diagnostics
//! buffer, plus a small gallery application that ties them together.

#![doc(html_root_url = "https://docs.rs/iced_carousel/0.1.0")]

pub mod app;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod master_spinner;
pub mod media;
pub mod ui;

pub use context::CarouselContext;
pub use error::{Error, LoadError, Result};

#[cfg(test)]
mod tests {
    // This is where common library tests can go
}
