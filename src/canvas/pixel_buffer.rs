use image::RgbaImage;

use crate::utils::color::Color;

/// Flat row-major RGBA grid. Never smaller than 1x1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<Color>,
}

impl PixelBuffer {
    /// Create a buffer filled with `background`; zero dimensions are clamped to 1.
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            data: vec![background; width * height],
        }
    }

    /// Current buffer width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current buffer height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.data
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.data
    }

    /// Whether signed coordinates land inside the buffer.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Read a pixel. Callers keep coordinates in range; release builds clamp.
    pub fn get(&self, x: usize, y: usize) -> Color {
        debug_assert!(
            x < self.width && y < self.height,
            "get({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.data[self.index(x, y)]
    }

    /// Write a pixel. Callers keep coordinates in range; release builds drop the write.
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        debug_assert!(
            x < self.width && y < self.height,
            "set({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.data[idx] = color;
        }
    }

    /// Clipped write for rasterizers: out-of-range coordinates are ignored.
    pub fn plot(&mut self, x: i32, y: i32, color: Color) {
        if self.contains(x, y) {
            let idx = self.index(x as usize, y as usize);
            self.data[idx] = color;
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.data.fill(color);
    }

    /// New buffer of the requested size with this content anchored top-left
    /// and any new area filled opaque white.
    pub fn resize(&self, width: usize, height: usize) -> PixelBuffer {
        let mut out = PixelBuffer::new(width, height, Color::WHITE);
        let copy_w = self.width.min(out.width);
        let copy_h = self.height.min(out.height);
        for y in 0..copy_h {
            let src = y * self.width;
            let dst = y * out.width;
            out.data[dst..dst + copy_w].copy_from_slice(&self.data[src..src + copy_w]);
        }
        out
    }

    /// Copy an RGBA image into a new buffer of the same size.
    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let width = img.width().max(1) as usize;
        let height = img.height().max(1) as usize;
        let mut out = PixelBuffer::new(width, height, Color::WHITE);
        for (x, y, px) in img.enumerate_pixels() {
            out.set(x as usize, y as usize, Color::from(*px));
        }
        out
    }

    /// Convert to an RGBA image for the codec.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for px in &self.data {
            bytes.extend_from_slice(&px.to_array());
        }
        RgbaImage::from_raw(self.width as u32, self.height as u32, bytes)
            .unwrap_or_else(|| RgbaImage::new(self.width as u32, self.height as u32))
    }
}
