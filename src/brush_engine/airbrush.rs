use std::f32::consts::TAU;

use rand::Rng;

use crate::canvas::pixel_buffer::PixelBuffer;
use crate::utils::color::Color;
use crate::utils::vector::{Point, Vec2};

/// Upper bound on samples in one spray, reached from pen widths around 850.
pub const MAX_SPRAY_SAMPLES: usize = 4096;

/// Spray radius for a pen width.
pub fn spray_radius(width: u32) -> f32 {
    width as f32 * 1.6
}

/// Number of single-pixel samples per spray for a pen width.
pub fn spray_density(width: u32) -> usize {
    ((spray_radius(width) * 3.0).floor() as usize).min(MAX_SPRAY_SAMPLES)
}

/// Draw the pixel offsets of one spray, area-uniform over the disc.
pub fn spray_offsets<R: Rng>(rng: &mut R, width: u32) -> Vec<Point> {
    let radius = spray_radius(width);
    (0..spray_density(width))
        .map(|_| {
            // sqrt keeps the density uniform per unit area instead of clumping at the centre
            let r = rng.random::<f32>().sqrt() * radius;
            let theta = rng.random::<f32>() * TAU;
            Point::from_vec2(Vec2::new(r * theta.cos(), r * theta.sin()))
        })
        .collect()
}

/// Spray single pixels around `pos`, returning how many samples were taken
/// (samples that land off the canvas are counted but not painted).
pub fn airbrush<R: Rng>(
    buf: &mut PixelBuffer,
    pos: Point,
    color: Color,
    width: u32,
    rng: &mut R,
) -> usize {
    let offsets = spray_offsets(rng, width);
    for offset in &offsets {
        buf.plot(
            pos.x.saturating_add(offset.x),
            pos.y.saturating_add(offset.y),
            color,
        );
    }
    offsets.len()
}
