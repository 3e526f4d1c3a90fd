// SPDX-License-Identifier: MPL-2.0
//! PDF document session over the PDFium rendering library.
//!
//! [`DocumentSession`] plays the external collaborator role: decode bytes into
//! a document, report the page count, and rasterize single pages at a fixed
//! scale. Everything else about PDF internals stays inside PDFium.

pub mod raster;

use crate::error::{Error, Result};
use pdfium_render::prelude::*;
use raster::RasterImage;
use std::fmt;
use std::path::Path;

/// Fixed rasterization scale: PDF points × 1.5 → output pixels.
pub const RENDER_SCALE: f32 = 1.5;

/// A decoded PDF document plus its page count.
///
/// One session exists per loaded file; a new submission replaces it
/// wholesale. Shared behind an `Arc` so render tasks can run off the update
/// loop (the `sync` feature of `pdfium-render` provides the thread-safe
/// bindings).
pub struct DocumentSession {
    document: PdfDocument<'static>,
    page_count: u32,
}

impl fmt::Debug for DocumentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentSession")
            .field("page_count", &self.page_count)
            .finish()
    }
}

impl DocumentSession {
    /// Initialize the PDFium library.
    ///
    /// Search order:
    /// 1. Executable's directory (for app bundles)
    /// 2. Current working directory
    /// 3. System library paths
    fn bind_pdfium() -> Result<Pdfium> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));

        if let Some(ref dir) = exe_dir {
            if let Ok(bindings) =
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
            {
                return Ok(Pdfium::new(bindings));
            }
        }

        Ok(Pdfium::new(
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library())
                .map_err(|e| Error::Decode(e.to_string()))?,
        ))
    }

    /// Decodes a PDF document from owned bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if PDFium cannot be bound, the bytes are not
    /// a valid PDF, or the document reports zero pages.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let pdfium = Box::leak(Box::new(Self::bind_pdfium()?));

        // Leak the bytes so the document can borrow them for 'static.
        let data_static: &'static [u8] = Box::leak(data.into_boxed_slice());

        let document = pdfium
            .load_pdf_from_byte_slice(data_static, None)
            .map_err(|e| Error::Decode(e.to_string()))?;

        let page_count = u32::from(document.pages().len());
        if page_count == 0 {
            return Err(Error::Decode("document has no pages".to_string()));
        }

        Ok(Self {
            document,
            page_count,
        })
    }

    /// Number of pages in the document, always ≥ 1.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Renders the given 1-based page at `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PageLoad`] for an out-of-range index or a failed page
    /// fetch, and [`Error::Render`] if rasterization fails.
    pub fn render_page(&self, page_number: u32, scale: f32) -> Result<RenderedPage> {
        if page_number < 1 || page_number > self.page_count {
            return Err(Error::PageLoad(format!(
                "page {} out of range 1..={}",
                page_number, self.page_count
            )));
        }

        let index = (page_number - 1) as u16;
        let page = self
            .document
            .pages()
            .get(index)
            .map_err(|e| Error::PageLoad(e.to_string()))?;

        let (width, height) = viewport_size(page.width().value, page.height().value, scale);
        let config = PdfRenderConfig::new()
            .set_target_width(width)
            .set_target_height(height);

        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| Error::Render(e.to_string()))?;

        let image = RasterImage::from_rgba(
            width as u32,
            height as u32,
            bitmap.as_rgba_bytes().to_vec(),
        );

        Ok(RenderedPage { page_number, image })
    }
}

/// Output dimensions for a page viewport at the given scale.
fn viewport_size(width_pts: f32, height_pts: f32, scale: f32) -> (i32, i32) {
    let width = (width_pts * scale).round().max(1.0) as i32;
    let height = (height_pts * scale).round().max(1.0) as i32;
    (width, height)
}

/// A rendered page: raster surface plus the 1-based page index it represents.
///
/// Discarded and rebuilt on every navigation; never accumulated.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub page_number: u32,
    pub image: RasterImage,
}

impl RenderedPage {
    /// Suggested save name. The 1-based numbering and the `halaman-` prefix
    /// are part of the export contract and are not localized.
    #[must_use]
    pub fn suggested_file_name(&self) -> String {
        format!("halaman-{}.png", self.page_number)
    }

    /// Encodes the rendered surface as PNG.
    pub fn png_bytes(&self) -> Result<Vec<u8>> {
        self.image.png_bytes()
    }
}
