//! Landscape PDF export.
//!
//! One A4 landscape page, the snapshot drawn at full page width with its
//! height following the aspect ratio, anchored to the top-left corner. A
//! snapshot too tall for the page is scaled down to page height instead.

use super::pdfium_loader::PdfiumLoader;
use super::{ExportError, ExportResult, SnapshotSource, capture};
use crate::constants::{A4_LANDSCAPE_HEIGHT_PT, A4_LANDSCAPE_WIDTH_PT};
use image::DynamicImage;
use pdfium_render::prelude::*;

/// Where the image lands on the page, in PDF points (origin bottom-left)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagePlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Compute the image rectangle for a `width`×`height` pixel snapshot
pub fn fit_to_landscape_page(width: u32, height: u32) -> PagePlacement {
    let page_w = A4_LANDSCAPE_WIDTH_PT;
    let page_h = A4_LANDSCAPE_HEIGHT_PT;

    if width == 0 || height == 0 {
        return PagePlacement {
            x: 0.0,
            y: page_h,
            width: 0.0,
            height: 0.0,
        };
    }

    let aspect = height as f32 / width as f32;
    let (w, h) = if page_w * aspect <= page_h {
        (page_w, page_w * aspect)
    } else {
        (page_h / aspect, page_h)
    };

    PagePlacement {
        x: 0.0,
        y: page_h - h,
        width: w,
        height: h,
    }
}

/// Snapshot the view and wrap it in a one-page landscape PDF
pub fn export_pdf(source: &dyn SnapshotSource) -> ExportResult<Vec<u8>> {
    let image = capture(source)?;
    let placement = fit_to_landscape_page(image.width(), image.height());
    let pdfium = PdfiumLoader::load()?;

    let bytes = render_document(&pdfium, DynamicImage::ImageRgba8(image), placement)
        .map_err(|e| ExportError::Document(format!("{:?}", e)))?;

    tracing::debug!(size = bytes.len(), "Generated PDF export");
    Ok(bytes)
}

fn render_document(
    pdfium: &Pdfium,
    image: DynamicImage,
    placement: PagePlacement,
) -> Result<Vec<u8>, PdfiumError> {
    let mut document = pdfium.create_new_pdf()?;
    let paper = PdfPagePaperSize::Custom(
        PdfPoints::new(A4_LANDSCAPE_WIDTH_PT),
        PdfPoints::new(A4_LANDSCAPE_HEIGHT_PT),
    );
    {
        let mut page = document.pages_mut().create_page_at_end(paper)?;
        page.objects_mut().create_image_object(
            PdfPoints::new(placement.x),
            PdfPoints::new(placement.y),
            &image,
            Some(PdfPoints::new(placement.width)),
            Some(PdfPoints::new(placement.height)),
        )?;
    }

    document.save_to_bytes()
}
