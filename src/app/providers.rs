//! Capabilities the host UI supplies for prompts. Returning `None` cancels
//! the operation that asked.

use crate::utils::color::Color;
use crate::utils::fonts::FontDescriptor;

/// Full set of editable text properties, answered in one go.
#[derive(Clone, Debug, PartialEq)]
pub struct TextDraft {
    pub text: String,
    pub font: FontDescriptor,
    pub color: Color,
}

pub trait TextInputProvider {
    fn request_text(&mut self, current: &TextDraft) -> Option<TextDraft>;
}

impl<F> TextInputProvider for F
where
    F: FnMut(&TextDraft) -> Option<TextDraft>,
{
    fn request_text(&mut self, current: &TextDraft) -> Option<TextDraft> {
        self(current)
    }
}

/// Bounds and default for a numeric prompt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericRange<T> {
    pub label: &'static str,
    pub min: T,
    pub max: T,
    pub default: T,
    pub decimals: u32,
}

pub const BRIGHTNESS_RANGE: NumericRange<i32> = NumericRange {
    label: "Brightness delta",
    min: -255,
    max: 255,
    default: 0,
    decimals: 0,
};

pub const CONTRAST_RANGE: NumericRange<f32> = NumericRange {
    label: "Contrast factor",
    min: 0.1,
    max: 3.0,
    default: 1.0,
    decimals: 2,
};

impl NumericRange<i32> {
    pub fn sanitize(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

impl NumericRange<f32> {
    /// Clamp into range and round to the declared number of decimals.
    pub fn sanitize(&self, value: f32) -> f32 {
        let scale = 10f32.powi(self.decimals as i32);
        ((value * scale).round() / scale).clamp(self.min, self.max)
    }
}

pub trait NumericInputProvider {
    fn request_int(&mut self, range: &NumericRange<i32>) -> Option<i32>;
    fn request_float(&mut self, range: &NumericRange<f32>) -> Option<f32>;
}
