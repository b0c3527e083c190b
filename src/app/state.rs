use crate::brush_engine::{ShapeKind, StrokeState};
use crate::canvas::pixel_buffer::PixelBuffer;
use crate::canvas::text_layer::TextId;
use crate::utils::color::Color;
use crate::utils::fonts::FontDescriptor;
use crate::utils::vector::Point;

pub const DEFAULT_CANVAS_W: usize = 800;
pub const DEFAULT_CANVAS_H: usize = 600;
pub const DEFAULT_UNDO_LIMIT: usize = 20;

/// Everything the engine needs to start a canvas; replaces process-wide settings.
#[derive(Clone, Debug)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
    pub history_depth: usize,
    /// Fill for new canvases and the eraser's paint.
    pub background: Color,
    pub pen_color: Color,
    pub pen_width: u32,
    pub text_color: Color,
    pub text_font: FontDescriptor,
    pub blur_size: usize,
    /// Fixed airbrush seed for reproducible sprays; `None` seeds from the OS.
    pub airbrush_seed: Option<u64>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_W,
            height: DEFAULT_CANVAS_H,
            history_depth: DEFAULT_UNDO_LIMIT,
            background: Color::WHITE,
            pen_color: Color::BLACK,
            pen_width: 8,
            text_color: Color::BLACK,
            text_font: FontDescriptor::default(),
            blur_size: 3,
            airbrush_seed: None,
        }
    }
}

impl CanvasConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history_depth = depth.max(1);
        self
    }

    pub fn with_pen(mut self, color: Color, width: u32) -> Self {
        self.pen_color = color;
        self.pen_width = width.max(1);
        self
    }

    pub fn with_airbrush_seed(mut self, seed: u64) -> Self {
        self.airbrush_seed = Some(seed);
        self
    }
}

/// Pointer interaction currently in flight.
pub enum Interaction {
    Idle,
    Stroke(StrokeState),
    Shape {
        kind: ShapeKind,
        anchor: Point,
        /// Canvas as it was when the drag started; each preview redraws from it.
        scratch: PixelBuffer,
    },
    Drag {
        id: TextId,
        /// Pointer offset from the item's anchor at grab time.
        grab: Point,
        start: Point,
    },
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }
}
