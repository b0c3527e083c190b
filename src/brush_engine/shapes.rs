use std::f32::consts::TAU;

use crate::brush_engine::brush::Pen;
use crate::brush_engine::stroke::draw_line;
use crate::canvas::pixel_buffer::PixelBuffer;
use crate::utils::vector::{Point, Vec2};

/// Shapes that are dragged out from an anchor to the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rect,
    Ellipse,
}

impl ShapeKind {
    pub fn draw(self, buf: &mut PixelBuffer, p1: Point, p2: Point, pen: &Pen) {
        match self {
            ShapeKind::Line => draw_line(buf, p1, p2, pen),
            ShapeKind::Rect => draw_rect(buf, p1, p2, pen),
            ShapeKind::Ellipse => draw_ellipse(buf, p1, p2, pen),
        }
    }
}

fn normalize(p1: Point, p2: Point) -> (Point, Point) {
    (
        Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
        Point::new(p1.x.max(p2.x), p1.y.max(p2.y)),
    )
}

/// Stroke the outline of the box spanned by two corners; the interior is untouched.
pub fn draw_rect(buf: &mut PixelBuffer, p1: Point, p2: Point, pen: &Pen) {
    let (min, max) = normalize(p1, p2);
    let tl = min;
    let tr = Point::new(max.x, min.y);
    let br = max;
    let bl = Point::new(min.x, max.y);
    draw_line(buf, tl, tr, pen);
    draw_line(buf, tr, br, pen);
    draw_line(buf, br, bl, pen);
    draw_line(buf, bl, tl, pen);
}

/// Stroke the ellipse inscribed in the box spanned by two corners.
///
/// The outline is sampled around the perimeter and the samples are joined
/// with pen lines, so thick pens get the same round joins as freehand strokes.
pub fn draw_ellipse(buf: &mut PixelBuffer, p1: Point, p2: Point, pen: &Pen) {
    let (min, max) = normalize(p1, p2);
    if min.x == max.x || min.y == max.y {
        draw_line(buf, min, max, pen);
        return;
    }

    let center = Vec2::new(
        (min.x + max.x) as f32 / 2.0,
        (min.y + max.y) as f32 / 2.0,
    );
    let rx = (max.x - min.x) as f32 / 2.0;
    let ry = (max.y - min.y) as f32 / 2.0;

    // multiple of four so the axis extremes are sampled exactly
    let steps = ((TAU * rx.max(ry)).ceil() as usize).max(16).next_multiple_of(4);

    let sample = |i: usize| -> Point {
        let t = TAU * i as f32 / steps as f32;
        Point::from_vec2(center + Vec2::new(rx * t.cos(), ry * t.sin()))
    };

    let mut prev = sample(0);
    for i in 1..=steps {
        let next = sample(i % steps);
        draw_line(buf, prev, next, pen);
        prev = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::color::Color;

    #[test]
    fn rect_strokes_border_only() {
        let mut buf = PixelBuffer::new(10, 10, Color::WHITE);
        draw_rect(&mut buf, Point::new(7, 8), Point::new(2, 1), &Pen::new(Color::BLACK, 1));
        for x in 2..=7 {
            assert_eq!(buf.get(x, 1), Color::BLACK);
            assert_eq!(buf.get(x, 8), Color::BLACK);
        }
        for y in 1..=8 {
            assert_eq!(buf.get(2, y), Color::BLACK);
            assert_eq!(buf.get(7, y), Color::BLACK);
        }
        assert_eq!(buf.get(4, 4), Color::WHITE);
        assert_eq!(buf.get(0, 0), Color::WHITE);
        assert_eq!(buf.get(8, 9), Color::WHITE);
    }

    #[test]
    fn rect_corner_order_does_not_matter() {
        let pen = Pen::new(Color::BLACK, 3);
        let mut a = PixelBuffer::new(16, 16, Color::WHITE);
        let mut b = a.clone();
        draw_rect(&mut a, Point::new(2, 3), Point::new(12, 11), &pen);
        draw_rect(&mut b, Point::new(12, 3), Point::new(2, 11), &pen);
        assert_eq!(a, b);
    }

    #[test]
    fn ellipse_stays_inside_its_box() {
        let mut buf = PixelBuffer::new(30, 30, Color::WHITE);
        draw_ellipse(&mut buf, Point::new(5, 5), Point::new(25, 19), &Pen::new(Color::BLACK, 1));
        for y in 0..30 {
            for x in 0..30 {
                if buf.get(x, y) == Color::BLACK {
                    assert!((5..=25).contains(&x) && (5..=19).contains(&y), "({x}, {y})");
                }
            }
        }
        // centre left open, extremes touched
        assert_eq!(buf.get(15, 12), Color::WHITE);
        assert_eq!(buf.get(25, 12), Color::BLACK);
        assert_eq!(buf.get(5, 12), Color::BLACK);
    }

    #[test]
    fn flat_ellipse_collapses_to_line() {
        let pen = Pen::new(Color::BLACK, 1);
        let mut a = PixelBuffer::new(10, 4, Color::WHITE);
        let mut b = a.clone();
        draw_ellipse(&mut a, Point::new(1, 2), Point::new(8, 2), &pen);
        draw_line(&mut b, Point::new(1, 2), Point::new(8, 2), &pen);
        assert_eq!(a, b);
    }
}
