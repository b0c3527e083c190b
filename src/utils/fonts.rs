//! Text measurement and rendering capabilities.
//!
//! Glyph shaping is owned by whatever front-end hosts the canvas; the engine
//! only needs metrics for hit-testing and a renderer for flattening on export.

use crate::canvas::pixel_buffer::PixelBuffer;
use crate::canvas::text_layer::StyledText;

/// Font selection carried by each text item. Opaque to the engine apart from
/// being handed to a [`FontMetrics`] implementation.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    pub family: String,
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
        }
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("Arial", 20.0)
    }
}

/// Measured extents of a run of text, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextMetrics {
    pub advance: i32,
    pub line_height: i32,
    pub ascent: i32,
}

pub trait FontMetrics {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextMetrics;
}

pub trait TextRenderer {
    /// Draw `item` onto `buf` with its anchor on the baseline.
    fn render(&self, buf: &mut PixelBuffer, item: &StyledText);
}

/// Deterministic fixed-advance font used for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedMetrics;

impl FixedMetrics {
    fn cell_width(font: &FontDescriptor) -> i32 {
        ((font.size * 0.6).round() as i32).max(1)
    }
}

impl FontMetrics for FixedMetrics {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextMetrics {
        let glyphs = text.chars().count() as i32;
        TextMetrics {
            advance: glyphs * Self::cell_width(font),
            line_height: (font.size * 1.2).ceil() as i32,
            ascent: (font.size * 0.8).ceil() as i32,
        }
    }
}

impl TextRenderer for FixedMetrics {
    // One solid block per visible glyph, from the ascent line down to the baseline.
    fn render(&self, buf: &mut PixelBuffer, item: &StyledText) {
        let cell = Self::cell_width(&item.font);
        let ascent = (item.font.size * 0.8).ceil() as i32;
        let top = item.pos.y - ascent;
        for (i, ch) in item.text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let left = item.pos.x + i as i32 * cell;
            // one pixel gap between glyph cells
            for y in top..item.pos.y {
                for x in left..left + (cell - 1).max(1) {
                    buf.plot(x, y, item.color);
                }
            }
        }
    }
}
