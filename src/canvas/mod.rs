pub mod history;
pub mod pixel_buffer;
pub mod text_layer;
