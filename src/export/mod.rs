//! Dashboard export
//!
//! Turns a rendered view into downloadable bytes:
//!
//! - `export_png` - PNG encoding of one snapshot
//! - `export_pdf` - One landscape A4 page with the snapshot at full width
//! - `png_data_url` - `data:image/png;base64,...` for download links
//!
//! Capturing pixels is the UI's job; it hands us a [`SnapshotSource`].

mod pdf;
mod pdfium_loader;

pub use pdf::{PagePlacement, export_pdf, fit_to_landscape_page};
pub use pdfium_loader::PdfiumLoader;

use crate::constants::{PDF_EXPORT_NAME, PNG_EXPORT_NAME};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use thiserror::Error;

/// Errors that can occur while exporting a view
#[derive(Error, Debug)]
pub enum ExportError {
    /// The view could not be rasterized
    #[error("Failed to capture view: {0}")]
    Snapshot(String),

    /// The snapshot has zero width or height
    #[error("Snapshot is empty")]
    EmptyImage,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// PDF generation failed (including pdfium not being available)
    #[error("PDF generation failed: {0}")]
    Document(String),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Something that can rasterize the dashboard region being exported
pub trait SnapshotSource {
    fn snapshot(&self) -> ExportResult<RgbaImage>;
}

impl SnapshotSource for RgbaImage {
    fn snapshot(&self) -> ExportResult<RgbaImage> {
        Ok(self.clone())
    }
}

/// Take a snapshot and reject degenerate images
pub(crate) fn capture(source: &dyn SnapshotSource) -> ExportResult<RgbaImage> {
    let image = source.snapshot()?;
    if image.width() == 0 || image.height() == 0 {
        return Err(ExportError::EmptyImage);
    }
    Ok(image)
}

/// Encode an image as PNG
pub fn encode_png(image: &RgbaImage) -> ExportResult<Vec<u8>> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image.clone()).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Snapshot the view and encode it as PNG
pub fn export_png(source: &dyn SnapshotSource) -> ExportResult<Vec<u8>> {
    let image = capture(source)?;
    let bytes = encode_png(&image)?;
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        size = bytes.len(),
        "Encoded PNG export"
    );
    Ok(bytes)
}

/// Finished export ready to be offered as a download
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            file_name: PNG_EXPORT_NAME,
            mime_type: "image/png",
            bytes,
        }
    }

    pub fn pdf(bytes: Vec<u8>) -> Self {
        Self {
            file_name: PDF_EXPORT_NAME,
            mime_type: "application/pdf",
            bytes,
        }
    }

    /// Inline `data:` URL for a download link
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}
