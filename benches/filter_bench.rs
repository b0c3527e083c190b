use criterion::{Criterion, criterion_group, criterion_main};
use rusty_canvas::{
    Color, PixelBuffer,
    ops::{
        adjustments,
        convolution::{Kernel, convolve},
    },
};

fn noisy_canvas(w: usize, h: usize) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h, Color::WHITE);
    for y in 0..h {
        for x in 0..w {
            let v = ((x * 31 + y * 17) % 256) as u8;
            buf.set(x, y, Color::rgb(v, v / 2, 255 - v));
        }
    }
    buf
}

fn bench_convolution(c: &mut Criterion) {
    let src = noisy_canvas(800, 600);
    let blur = Kernel::box_blur(3);
    let wide_blur = Kernel::box_blur(9);
    let sharpen = Kernel::sharpen();

    c.bench_function("box_blur_3_800x600", |b| b.iter(|| convolve(&src, &blur)));
    c.bench_function("box_blur_9_800x600", |b| b.iter(|| convolve(&src, &wide_blur)));
    c.bench_function("sharpen_800x600", |b| b.iter(|| convolve(&src, &sharpen)));
}

fn bench_adjustments(c: &mut Criterion) {
    let src = noisy_canvas(800, 600);

    c.bench_function("brightness_800x600", |b| {
        b.iter_batched_ref(
            || src.clone(),
            |buf| adjustments::apply_brightness(buf, 40),
            criterion::BatchSize::LargeInput,
        )
    });
    c.bench_function("contrast_800x600", |b| {
        b.iter_batched_ref(
            || src.clone(),
            |buf| adjustments::apply_contrast(buf, 1.4),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_convolution, bench_adjustments);
criterion_main!(benches);
