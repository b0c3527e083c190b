pub mod input_handler;
pub mod painter;
pub mod providers;
pub mod state;
pub mod tools;

pub use painter::CanvasEngine;
pub use state::CanvasConfig;
