//! Rasterization of pen dabs, strokes, shapes and airbrush spray.
//!
//! All float to pixel conversions floor onto the grid so previews and final
//! shapes land on identical pixels.
pub mod airbrush;
pub mod brush;
pub mod shapes;
pub mod stroke;

pub use airbrush::{airbrush, spray_offsets};
pub use brush::Pen;
pub use shapes::{ShapeKind, draw_ellipse, draw_rect};
pub use stroke::{StrokeState, draw_line, draw_point};
