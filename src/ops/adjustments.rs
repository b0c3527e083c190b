use rayon::prelude::*;

use crate::canvas::pixel_buffer::PixelBuffer;
use crate::utils::color::{Color, clamp_channel, round_channel};
use crate::utils::profiler::ScopeTimer;

/// Map every pixel in place through `transform`.
fn apply_pixel_transform<F>(buf: &mut PixelBuffer, transform: F)
where
    F: Fn(Color) -> Color + Sync,
{
    buf.pixels_mut()
        .par_iter_mut()
        .for_each(|px| *px = transform(*px));
}

/// Shift R, G and B by `delta`, saturating at 0 and 255. Alpha is untouched.
pub fn apply_brightness(buf: &mut PixelBuffer, delta: i32) {
    let _timer = ScopeTimer::over_pixels("brightness", buf.pixels().len());
    apply_pixel_transform(buf, |c| {
        c.map_rgb(|v| clamp_channel((v as i32).saturating_add(delta)))
    });
}

/// Scale R, G and B around mid-gray (128). Alpha is untouched.
pub fn apply_contrast(buf: &mut PixelBuffer, factor: f32) {
    let _timer = ScopeTimer::over_pixels("contrast", buf.pixels().len());
    apply_pixel_transform(buf, |c| {
        c.map_rgb(|v| round_channel((v as f32 - 128.0) * factor + 128.0))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PixelBuffer {
        let mut buf = PixelBuffer::new(3, 1, Color::rgba(0, 0, 0, 255));
        buf.set(0, 0, Color::rgba(10, 128, 250, 40));
        buf.set(1, 0, Color::rgba(200, 60, 128, 255));
        buf.set(2, 0, Color::rgba(255, 0, 77, 0));
        buf
    }

    #[test]
    fn large_positive_brightness_saturates_rgb_only() {
        let mut buf = sample();
        apply_brightness(&mut buf, 300);
        assert_eq!(buf.get(0, 0), Color::rgba(255, 255, 255, 40));
        assert_eq!(buf.get(2, 0), Color::rgba(255, 255, 255, 0));
    }

    #[test]
    fn large_negative_brightness_floors_rgb_only() {
        let mut buf = sample();
        apply_brightness(&mut buf, -300);
        assert_eq!(buf.get(0, 0), Color::rgba(0, 0, 0, 40));
        assert_eq!(buf.get(1, 0), Color::rgba(0, 0, 0, 255));
    }

    #[test]
    fn small_brightness_shift() {
        let mut buf = sample();
        apply_brightness(&mut buf, 10);
        assert_eq!(buf.get(1, 0), Color::rgba(210, 70, 138, 255));
        assert_eq!(buf.get(0, 0), Color::rgba(20, 138, 255, 40));
    }

    #[test]
    fn unit_contrast_is_identity() {
        let mut buf = sample();
        let before = buf.clone();
        apply_contrast(&mut buf, 1.0);
        assert_eq!(buf, before);
    }

    #[test]
    fn contrast_stretches_around_mid_gray() {
        let mut buf = sample();
        apply_contrast(&mut buf, 2.0);
        // (10 - 128) * 2 + 128 = -108 -> 0, 128 stays, (250 - 128) * 2 + 128 -> 255
        assert_eq!(buf.get(0, 0), Color::rgba(0, 128, 255, 40));
        // (60 - 128) * 2 + 128 = -8 -> 0
        assert_eq!(buf.get(1, 0), Color::rgba(255, 0, 128, 255));
    }

    #[test]
    fn low_contrast_rounds() {
        let mut buf = PixelBuffer::new(1, 1, Color::rgb(201, 55, 128));
        apply_contrast(&mut buf, 0.5);
        // 164.5 rounds away from zero, 91.5 likewise
        assert_eq!(buf.get(0, 0), Color::rgb(165, 92, 128));
    }

    #[test]
    fn brightness_saturates_for_extreme_deltas() {
        let mut buf = PixelBuffer::new(1, 1, Color::rgba(10, 10, 10, 99));
        apply_brightness(&mut buf, i32::MAX);
        assert_eq!(buf.get(0, 0), Color::rgba(255, 255, 255, 99));
        apply_brightness(&mut buf, i32::MIN);
        assert_eq!(buf.get(0, 0), Color::rgba(0, 0, 0, 99));
    }
}
