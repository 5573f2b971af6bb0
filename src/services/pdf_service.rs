use std::io::Cursor;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::ImageFormat;
use pdfium_render::prelude::*;
use tracing::info;

use crate::errors::PanelError;
use crate::render::html::{scrollable, warning_block};

/// Raster resolution for page images. Page geometry is in points
/// (72 per inch), so the scale factor is DPI / 72.
pub const RENDER_DPI: f32 = 150.0;

/// Opens the document, rasters every page and stacks the images into
/// one scrollable block. Zero-page documents get a warning instead of
/// images; open or render failures become a `PanelError` for the
/// caller to show inline.
pub fn render_pdf_panel(
    path: &Path,
    max_height: u32,
    img_width: &str,
) -> Result<String, PanelError> {
    info!("Rendering PDF panel for {}", path.display());
    let pages = rasterize_pages(path)?;
    Ok(pages_block(&pages, max_height, img_width))
}

/// One base64-encoded PNG per page, in page order.
fn rasterize_pages(path: &Path) -> Result<Vec<String>, PanelError> {
    let pdfium = Pdfium::new(
        Pdfium::bind_to_system_library().map_err(|e| PanelError::Pdf(e.to_string()))?,
    );
    let document = pdfium
        .load_pdf_from_file(path, None)
        .map_err(|e| PanelError::Pdf(e.to_string()))?;

    let render_config = PdfRenderConfig::new().scale_page_by_factor(RENDER_DPI / 72.0);

    let mut pages = Vec::new();
    for page in document.pages().iter() {
        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| PanelError::Pdf(e.to_string()))?;
        let mut png = Vec::new();
        bitmap
            .as_image()
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| PanelError::Pdf(e.to_string()))?;
        pages.push(STANDARD.encode(&png));
    }
    Ok(pages)
}

/// Stacks page images vertically inside one scrollable container.
/// An empty page list renders a warning and no image content.
pub fn pages_block(page_images: &[String], max_height: u32, img_width: &str) -> String {
    if page_images.is_empty() {
        return warning_block("No pages found in the PDF.");
    }
    let images_html: String = page_images
        .iter()
        .enumerate()
        .map(|(index, b64)| {
            format!(
                r#"<div style="display:flex;justify-content:center;"><img src="data:image/png;base64,{}" style="width:{};margin-bottom:8px;" alt="Page {}"/></div>"#,
                b64,
                img_width,
                index + 1
            )
        })
        .collect();
    scrollable(&images_html, max_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_pages_render_warning_without_images() {
        let html = pages_block(&[], 800, "70%");
        assert!(html.contains("No pages found in the PDF."));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_pages_stack_in_order_inside_scrollable_block() {
        let pages = vec!["aaaa".to_string(), "bbbb".to_string()];
        let html = pages_block(&pages, 800, "70%");
        assert!(html.contains("max-height:800px"));
        assert!(html.contains(r#"alt="Page 1""#));
        assert!(html.contains(r#"alt="Page 2""#));
        assert!(html.contains("data:image/png;base64,aaaa"));
        let first = html.find("aaaa").unwrap();
        let second = html.find("bbbb").unwrap();
        assert!(first < second);
    }
}
