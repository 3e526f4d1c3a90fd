// SPDX-License-Identifier: MPL-2.0
//! Raster surfaces produced by page rendering.

use crate::error::{Error, Result};
use iced::widget::image;
use std::io::Cursor;
use std::sync::Arc;

/// An RGBA pixel buffer plus the Iced handle used to display it.
///
/// The pixels are retained behind an [`Arc`] so PNG export does not require
/// re-rendering the page.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl RasterImage {
    /// Creates a new `RasterImage` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Returns a reference to the retained RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Encodes the retained pixels as PNG for the save-as action.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the pixel buffer does not match the
    /// recorded dimensions or the encoder fails.
    pub fn png_bytes(&self) -> Result<Vec<u8>> {
        let img = image_rs::RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
            .ok_or_else(|| Error::Render("pixel buffer does not match dimensions".to_string()))?;

        let mut out = Cursor::new(Vec::new());
        image_rs::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image_rs::ImageFormat::Png)
            .map_err(|e| Error::Render(e.to_string()))?;

        Ok(out.into_inner())
    }
}
