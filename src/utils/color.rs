use image::Rgba;

/// Straight (non-premultiplied) RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Construct from 0-255 channel values.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }

    /// Channel access by index in R, G, B, A order.
    pub fn channel(self, idx: usize) -> u8 {
        match idx {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            _ => self.a,
        }
    }

    /// Rebuild a color with each RGB channel mapped through `f`; alpha is kept.
    pub fn map_rgb(self, f: impl Fn(u8) -> u8) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
            a: self.a,
        }
    }
}

impl From<Rgba<u8>> for Color {
    fn from(px: Rgba<u8>) -> Self {
        Self::from_array(px.0)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba(c.to_array())
    }
}

/// Clamp an integer channel value into 0..=255.
pub fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Round a float channel value and clamp it into 0..=255.
pub fn round_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Source-over compositing of `src` onto `dst` in straight alpha.
pub fn alpha_over(src: Color, dst: Color) -> Color {
    if src.a == 255 {
        return src;
    }
    if src.a == 0 {
        return dst;
    }
    let sa = src.a as f32 / 255.0;
    let da = dst.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Color::TRANSPARENT;
    }

    let mix = |s: u8, d: u8| -> u8 {
        let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        round_channel(v)
    };

    Color {
        r: mix(src.r, dst.r),
        g: mix(src.g, dst.g),
        b: mix(src.b, dst.b),
        a: round_channel(out_a * 255.0),
    }
}
