use rayon::prelude::*;

use crate::canvas::pixel_buffer::PixelBuffer;
use crate::utils::color::{Color, round_channel};
use crate::utils::profiler::ScopeTimer;

/// Largest box blur side accepted; bigger requests are clamped to it.
pub const MAX_BOX_BLUR: usize = 99;

/// Weighted sliding-window filter: `out = round(sum * factor + offset)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    rows: usize,
    cols: usize,
    weights: Vec<f32>,
    pub factor: f32,
    pub offset: f32,
}

impl Kernel {
    /// Build a kernel from row-major weights. Returns `None` for an empty or
    /// ragged matrix.
    pub fn new(matrix: &[Vec<f32>], factor: f32, offset: f32) -> Option<Self> {
        let rows = matrix.len();
        let cols = matrix.first()?.len();
        if cols == 0 || matrix.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Self {
            rows,
            cols,
            weights: matrix.concat(),
            factor,
            offset,
        })
    }

    /// `n x n` box blur normalised by `1 / n^2`.
    ///
    /// `n` is clamped to `1..=MAX_BOX_BLUR` and even sizes are rounded up to
    /// the next odd one so the window stays centred on the pixel.
    pub fn box_blur(n: usize) -> Self {
        let n = n.clamp(1, MAX_BOX_BLUR) | 1;
        Self {
            rows: n,
            cols: n,
            weights: vec![1.0; n * n],
            factor: 1.0 / (n * n) as f32,
            offset: 0.0,
        }
    }

    pub fn sharpen() -> Self {
        Self {
            rows: 3,
            cols: 3,
            weights: vec![0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0],
            factor: 1.0,
            offset: 0.0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn weight(&self, kx: usize, ky: usize) -> f32 {
        self.weights[ky * self.cols + kx]
    }
}

/// Apply `kernel` to every channel of every pixel, producing a new buffer.
///
/// Samples that fall outside the source are clamped to the nearest edge
/// pixel, so borders keep their brightness.
pub fn convolve(src: &PixelBuffer, kernel: &Kernel) -> PixelBuffer {
    let _timer = ScopeTimer::over_pixels("convolve", src.pixels().len());
    let w = src.width();
    let h = src.height();
    let half_w = (kernel.cols / 2) as isize;
    let half_h = (kernel.rows / 2) as isize;
    let max_x = w as isize - 1;
    let max_y = h as isize - 1;

    let mut out = PixelBuffer::new(w, h, Color::TRANSPARENT);
    out.pixels_mut()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row_out)| {
            for (x, px) in row_out.iter_mut().enumerate() {
                let mut acc = [0.0f32; 4];
                for ky in 0..kernel.rows {
                    let sy = (y as isize + ky as isize - half_h).clamp(0, max_y) as usize;
                    for kx in 0..kernel.cols {
                        let k = kernel.weight(kx, ky);
                        if k == 0.0 {
                            continue;
                        }
                        let sx = (x as isize + kx as isize - half_w).clamp(0, max_x) as usize;
                        let c = src.get(sx, sy);
                        for (ch, sum) in acc.iter_mut().enumerate() {
                            *sum += k * c.channel(ch) as f32;
                        }
                    }
                }
                let [r, g, b, a] = acc.map(|sum| round_channel(sum * kernel.factor + kernel.offset));
                *px = Color::rgba(r, g, b, a);
            }
        });
    out
}
