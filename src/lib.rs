pub mod app;
pub mod brush_engine;
pub mod canvas;
pub mod error;
pub mod ops;
pub mod utils;

pub use app::input_handler::{PointerEvent, handle_pointer};
pub use app::providers::{NumericInputProvider, NumericRange, TextDraft, TextInputProvider};
pub use app::tools::Tool;
pub use app::{CanvasConfig, CanvasEngine};
pub use canvas::history::{History, HistorySignal, Snapshot};
pub use canvas::pixel_buffer::PixelBuffer;
pub use canvas::text_layer::{StyledText, TextEdit, TextId, TextLayer};
pub use error::{CanvasError, Result};
pub use utils::color::Color;
pub use utils::fonts::{FixedMetrics, FontDescriptor, FontMetrics, TextMetrics, TextRenderer};
pub use utils::vector::{Point, Rect};
