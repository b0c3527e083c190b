use crate::brush_engine::ShapeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Brush,
    Airbrush,
    Eraser,
    Line,
    Rect,
    Ellipse,
    Bucket,
    Text,
    TextSelect,
}

impl Tool {
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Airbrush => "Airbrush",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::Rect => "Rectangle",
            Tool::Ellipse => "Ellipse",
            Tool::Bucket => "Bucket",
            Tool::Text => "Text",
            Tool::TextSelect => "Select Text",
        }
    }

    /// Press-drag-release freehand tools.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Tool::Brush | Tool::Airbrush | Tool::Eraser)
    }

    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rect => Some(ShapeKind::Rect),
            Tool::Ellipse => Some(ShapeKind::Ellipse),
            _ => None,
        }
    }
}
