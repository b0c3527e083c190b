use image::{DynamicImage, ImageFormat};
use std::path::Path;

use crate::canvas::pixel_buffer::PixelBuffer;
use crate::canvas::text_layer::TextLayer;
use crate::error::{CanvasError, Result};
use crate::utils::fonts::TextRenderer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Bmp,
    Tiff,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Jpeg => "JPEG",
            ExportFormat::Bmp => "BMP",
            ExportFormat::Tiff => "TIFF",
        }
    }

    /// Pick the format from the path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            "bmp" => Some(ExportFormat::Bmp),
            "tif" | "tiff" => Some(ExportFormat::Tiff),
            _ => None,
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
            ExportFormat::Bmp => ImageFormat::Bmp,
            ExportFormat::Tiff => ImageFormat::Tiff,
        }
    }
}

/// Pixels with every text item drawn on top, back to front.
pub fn flatten(pixels: &PixelBuffer, text: &TextLayer, renderer: &dyn TextRenderer) -> PixelBuffer {
    let mut out = pixels.clone();
    for item in text.iter() {
        renderer.render(&mut out, item);
    }
    out
}

/// Flatten the canvas and write it to `path`, format chosen by extension.
pub fn export_canvas(
    pixels: &PixelBuffer,
    text: &TextLayer,
    renderer: &dyn TextRenderer,
    path: &Path,
) -> Result<()> {
    let format = ExportFormat::from_path(path)
        .ok_or_else(|| CanvasError::UnsupportedFormat(path.to_path_buf()))?;
    log::debug!(
        "exporting {} text item(s) as {} to {}",
        text.len(),
        format.label(),
        path.display()
    );
    let flat = flatten(pixels, text, renderer);
    save_pixel_buffer(&flat, path, format)
}

/// Save a buffer as-is. JPEG has no alpha channel, so it is written as RGB.
pub fn save_pixel_buffer(buf: &PixelBuffer, path: &Path, format: ExportFormat) -> Result<()> {
    let rgba = DynamicImage::ImageRgba8(buf.to_rgba_image());
    let img = match format {
        ExportFormat::Jpeg => DynamicImage::ImageRgb8(rgba.to_rgb8()),
        _ => rgba,
    };
    img.save_with_format(path, format.image_format())
        .map_err(|e| match e {
            image::ImageError::IoError(io) => CanvasError::Io(io),
            other => CanvasError::Encode(other),
        })
}
