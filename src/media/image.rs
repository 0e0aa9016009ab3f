// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for slides (PNG, JPEG, GIF, WebP, BMP).

use iced::widget::image;
use image_rs::GenericImageView;

use super::Source;
use crate::error::Result;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Decodes encoded image bytes (PNG, JPEG, etc.) into widget-ready data.
///
/// # Errors
///
/// Returns [`crate::error::Error::Load`] when the bytes are not a
/// supported image.
pub fn decode_bytes(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Resolves a slide source and decodes it.
///
/// Paths are read from disk; URLs are fetched over HTTP. The bytes are
/// decoded before this returns, so a success is guaranteed displayable.
///
/// # Errors
///
/// Returns a load error when the source is empty, the bytes cannot be
/// obtained, or decoding fails.
pub async fn load(src: String) -> Result<ImageData> {
    let source = Source::parse(&src)?;
    let bytes = match &source {
        Source::Path(path) => tokio::fs::read(path).await?,
        Source::Url(url) => fetch_bytes(url).await?,
    };
    decode_bytes(&bytes)
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}
