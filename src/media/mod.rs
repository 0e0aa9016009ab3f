// SPDX-License-Identifier: MPL-2.0
//! Image source handling for carousel slides.
//!
//! Slides address their content by source string. This module classifies
//! the string, fetches the bytes, and decodes them into widget-ready data.

pub mod image;

use std::path::PathBuf;

use crate::diagnostics::SourceKind;
use crate::error::LoadError;

// Re-export commonly used types
pub use image::{decode_bytes, load, ImageData};

/// A classified slide source.
///
/// Source strings come in two shapes: local filesystem paths and
/// `http`/`https` URLs. Everything that is not a URL is treated as a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Local filesystem path.
    Path(PathBuf),
    /// Remote URL.
    Url(String),
}

impl Source {
    /// Classifies a raw source string.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::EmptySource`] when the string is empty or
    /// whitespace only.
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LoadError::EmptySource);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(Source::Url(trimmed.to_string()))
        } else {
            Ok(Source::Path(PathBuf::from(trimmed)))
        }
    }

    /// Returns the diagnostics category for this source.
    #[must_use]
    pub fn kind(&self) -> SourceKind {
        match self {
            Source::Path(_) => SourceKind::Path,
            Source::Url(_) => SourceKind::Url,
        }
    }
}
