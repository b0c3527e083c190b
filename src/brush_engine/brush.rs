use crate::canvas::pixel_buffer::PixelBuffer;
use crate::utils::color::Color;
use crate::utils::vector::Point;

/// Solid round pen: color plus stroke thickness in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pen {
    pub color: Color,
    pub width: u32,
}

impl Pen {
    pub fn new(color: Color, width: u32) -> Self {
        Self { color, width }
    }

    /// Stamp a filled disc of diameter `width` centered on `center`.
    ///
    /// A pixel belongs to the disc when its integer offset from the center
    /// lies within `width / 2`. Width 0 and 1 both paint a single pixel.
    pub fn dab(&self, buf: &mut PixelBuffer, center: Point) {
        if self.width <= 1 {
            buf.plot(center.x, center.y, self.color);
            return;
        }

        let r = self.width as f32 / 2.0;
        let r_sq = r * r;
        let r_ceil = r.ceil() as i32;

        let min_x = center.x.saturating_sub(r_ceil);
        let max_x = center.x.saturating_add(r_ceil);
        let min_y = center.y.saturating_sub(r_ceil);
        let max_y = center.y.saturating_add(r_ceil);

        let canvas_w = buf.width() as i32;
        let canvas_h = buf.height() as i32;
        if max_x < 0 || max_y < 0 || min_x >= canvas_w || min_y >= canvas_h {
            return;
        }

        for y in min_y.max(0)..=max_y.min(canvas_h - 1) {
            let dy = (y - center.y) as f32;
            for x in min_x.max(0)..=max_x.min(canvas_w - 1) {
                let dx = (x - center.x) as f32;
                if dx * dx + dy * dy <= r_sq {
                    buf.plot(x, y, self.color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(buf: &PixelBuffer) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..buf.height() {
            for x in 0..buf.width() {
                if buf.get(x, y) != Color::WHITE {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn width_one_is_a_single_pixel() {
        let mut buf = PixelBuffer::new(5, 5, Color::WHITE);
        Pen::new(Color::BLACK, 1).dab(&mut buf, Point::new(2, 2));
        assert_eq!(painted(&buf), vec![(2, 2)]);
    }

    #[test]
    fn width_two_is_a_plus() {
        let mut buf = PixelBuffer::new(5, 5, Color::WHITE);
        Pen::new(Color::BLACK, 2).dab(&mut buf, Point::new(2, 2));
        assert_eq!(painted(&buf), vec![(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)]);
    }

    #[test]
    fn wide_disc_is_round_and_symmetric() {
        let mut buf = PixelBuffer::new(21, 21, Color::WHITE);
        Pen::new(Color::BLACK, 8).dab(&mut buf, Point::new(10, 10));
        assert_eq!(buf.get(14, 10), Color::BLACK);
        assert_eq!(buf.get(6, 10), Color::BLACK);
        assert_eq!(buf.get(10, 14), Color::BLACK);
        assert_eq!(buf.get(15, 10), Color::WHITE);
        // corner of the bounding square lies outside the disc
        assert_eq!(buf.get(14, 14), Color::WHITE);
    }

    #[test]
    fn dab_clips_at_the_edge() {
        let mut buf = PixelBuffer::new(4, 4, Color::WHITE);
        Pen::new(Color::BLACK, 6).dab(&mut buf, Point::new(-1, -1));
        assert_eq!(buf.get(0, 0), Color::BLACK);
        assert_eq!(buf.get(3, 3), Color::WHITE);
    }

    #[test]
    fn huge_width_covers_the_canvas() {
        let mut buf = PixelBuffer::new(6, 4, Color::WHITE);
        Pen::new(Color::BLACK, u32::MAX).dab(&mut buf, Point::new(2, 2));
        assert!(buf.pixels().iter().all(|&p| p == Color::BLACK));
    }
}
