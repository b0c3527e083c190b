use image::RgbaImage;
use image::imageops::{self, FilterType};
use std::path::Path;

use crate::canvas::pixel_buffer::PixelBuffer;
use crate::error::Result;
use crate::utils::color::{Color, alpha_over};

/// Decode an image file into RGBA.
pub fn decode_path(path: &Path) -> Result<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}

/// Decode an in-memory image (format sniffed from its header).
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbaImage> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Size of `src` scaled to fit inside `bounds` with its aspect ratio kept.
///
/// One side always matches the bound exactly; the other is the integer
/// quotient of the proportional size.
pub fn fit_size(src: (usize, usize), bounds: (usize, usize)) -> (usize, usize) {
    let (sw, sh) = (src.0.max(1) as u64, src.1.max(1) as u64);
    let (bw, bh) = (bounds.0.max(1) as u64, bounds.1.max(1) as u64);
    let rw = bh * sw / sh;
    let (w, h) = if rw <= bw { (rw, bh) } else { (bw, bw * sh / sw) };
    (w.max(1) as usize, h.max(1) as usize)
}

/// Scale `src` to fit a `width x height` canvas, center it and composite it
/// over opaque white.
pub fn compose_onto_canvas(src: &RgbaImage, width: usize, height: usize) -> PixelBuffer {
    let mut out = PixelBuffer::new(width, height, Color::WHITE);
    let (cw, ch) = (out.width(), out.height());
    let (sw, sh) = fit_size((src.width() as usize, src.height() as usize), (cw, ch));
    let scaled = imageops::resize(src, sw as u32, sh as u32, FilterType::Triangle);

    let off_x = (cw - sw) / 2;
    let off_y = (ch - sh) / 2;
    for (x, y, px) in scaled.enumerate_pixels() {
        let (dx, dy) = (off_x + x as usize, off_y + y as usize);
        let blended = alpha_over(Color::from(*px), out.get(dx, dy));
        out.set(dx, dy, blended);
    }
    out
}
