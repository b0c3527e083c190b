use crate::brush_engine::brush::Pen;
use crate::canvas::pixel_buffer::PixelBuffer;
use crate::utils::profiler::ScopeTimer;
use crate::utils::vector::Point;

/// Paint a round dot; equivalent to a zero-length line.
pub fn draw_point(buf: &mut PixelBuffer, pos: Point, pen: &Pen) {
    pen.dab(buf, pos);
}

/// Bresenham walk from `p1` to `p2` stamping the pen at every step, which
/// gives round caps and round joins for free.
pub fn draw_line(buf: &mut PixelBuffer, p1: Point, p2: Point, pen: &Pen) {
    walk_line(p1, p2, |p| pen.dab(buf, p));
}

/// Visit every grid point on the segment, endpoints included.
pub(crate) fn walk_line(p1: Point, p2: Point, mut visit: impl FnMut(Point)) {
    let (x0, y0) = (p1.x, p1.y);
    let (x1, y1) = (p2.x, p2.y);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        visit(Point::new(x, y));

        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Tracks the previous sample of a freehand stroke so each new sample only
/// paints the segment since the last one.
pub struct StrokeState {
    pub last_pos: Option<Point>,
    stroke_timer: Option<ScopeTimer>,
}

impl StrokeState {
    /// Create an empty stroke state and start the profiling timer.
    pub fn new() -> Self {
        Self {
            last_pos: None,
            stroke_timer: Some(ScopeTimer::new("stroke")),
        }
    }

    /// Add a sample: the first one paints a dot, later ones connect to the previous sample.
    pub fn add_point(&mut self, buf: &mut PixelBuffer, pen: &Pen, pos: Point) {
        match self.last_pos {
            Some(prev) => draw_line(buf, prev, pos, pen),
            None => draw_point(buf, pos, pen),
        }
        self.last_pos = Some(pos);
    }

    /// Reset the stroke state and emit the profiling metric.
    pub fn end(&mut self) {
        self.last_pos = None;
        self.stroke_timer.take();
    }
}

impl Default for StrokeState {
    fn default() -> Self {
        Self::new()
    }
}
