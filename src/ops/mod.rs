//! Whole-buffer operations: flood fill, convolution and tone adjustments.
pub mod adjustments;
pub mod convolution;
pub mod flood_fill;
