use crate::canvas::pixel_buffer::PixelBuffer;
use crate::utils::color::Color;
use crate::utils::profiler::ScopeTimer;
use crate::utils::vector::Point;

/// Replace the 4-connected region of the seed's color with `new_color`.
///
/// Returns the number of pixels repainted. A seed outside the buffer or a
/// seed already painted `new_color` changes nothing.
pub fn flood_fill(buf: &mut PixelBuffer, seed: Point, new_color: Color) -> usize {
    if !buf.contains(seed.x, seed.y) {
        return 0;
    }
    let target = buf.get(seed.x as usize, seed.y as usize);
    if target == new_color {
        return 0;
    }

    let _timer = ScopeTimer::over_pixels("flood_fill", buf.pixels().len());
    let width = buf.width();
    let height = buf.height();
    let mut visited = vec![false; width * height];
    let mut stack = vec![(seed.x as usize, seed.y as usize)];
    visited[seed.y as usize * width + seed.x as usize] = true;
    let mut filled = 0;

    while let Some((x, y)) = stack.pop() {
        if buf.get(x, y) != target {
            continue;
        }
        buf.set(x, y, new_color);
        filled += 1;

        let mut push = |nx: usize, ny: usize| {
            let vi = ny * width + nx;
            if !visited[vi] {
                visited[vi] = true;
                stack.push((nx, ny));
            }
        };
        if x + 1 < width {
            push(x + 1, y);
        }
        if x > 0 {
            push(x - 1, y);
        }
        if y + 1 < height {
            push(x, y + 1);
        }
        if y > 0 {
            push(x, y - 1);
        }
    }

    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Color = Color::rgb(200, 0, 0);
    const B: Color = Color::WHITE;
    const C: Color = Color::rgb(0, 0, 200);

    /// 10x10 of `B` with a solid 4x4 square of `A` at (3,3)..(6,6).
    fn square() -> PixelBuffer {
        let mut buf = PixelBuffer::new(10, 10, B);
        for y in 3..7 {
            for x in 3..7 {
                buf.set(x, y, A);
            }
        }
        buf
    }

    #[test]
    fn fill_with_seed_color_is_a_no_op() {
        let mut buf = square();
        let before = buf.clone();
        assert_eq!(flood_fill(&mut buf, Point::new(4, 4), A), 0);
        assert_eq!(buf, before);
    }

    #[test]
    fn fill_is_contained_to_the_region() {
        let mut buf = square();
        let before = buf.clone();
        assert_eq!(flood_fill(&mut buf, Point::new(5, 5), C), 16);
        for y in 0..10 {
            for x in 0..10 {
                let inside = (3..7).contains(&x) && (3..7).contains(&y);
                let expected = if inside { C } else { before.get(x, y) };
                assert_eq!(buf.get(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn fill_from_edge_of_blank_canvas_covers_everything() {
        let mut buf = PixelBuffer::new(10, 10, B);
        assert_eq!(flood_fill(&mut buf, Point::new(0, 5), C), 100);
        assert!(buf.pixels().iter().all(|&p| p == C));
    }

    #[test]
    fn diagonal_neighbours_are_not_connected() {
        let mut buf = PixelBuffer::new(3, 3, B);
        buf.set(1, 0, A);
        buf.set(0, 1, A);
        assert_eq!(flood_fill(&mut buf, Point::new(0, 0), C), 1);
        assert_eq!(buf.get(1, 1), B);
    }

    #[test]
    fn seed_outside_buffer_is_ignored() {
        let mut buf = square();
        assert_eq!(flood_fill(&mut buf, Point::new(-1, 3), C), 0);
        assert_eq!(flood_fill(&mut buf, Point::new(3, 10), C), 0);
    }

    #[test]
    fn large_region_does_not_overflow() {
        let mut buf = PixelBuffer::new(600, 600, B);
        assert_eq!(flood_fill(&mut buf, Point::new(300, 300), C), 360_000);
    }
}
