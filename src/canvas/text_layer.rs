use crate::utils::color::Color;
use crate::utils::fonts::{FontDescriptor, FontMetrics};
use crate::utils::vector::{Point, Rect};

/// Index of a text item inside its layer. Items are never removed, so ids stay valid.
pub type TextId = usize;

/// Positioned text annotation. `pos` is the baseline-left anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledText {
    pub text: String,
    pub pos: Point,
    pub color: Color,
    pub font: FontDescriptor,
    bounds: Rect,
}

impl StyledText {
    pub fn new(
        text: impl Into<String>,
        pos: Point,
        color: Color,
        font: FontDescriptor,
        metrics: &dyn FontMetrics,
    ) -> Self {
        let mut item = Self {
            text: text.into(),
            pos,
            color,
            font,
            bounds: Rect::default(),
        };
        item.update_bounds(metrics);
        item
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Recompute the bounding box: top edge sits one ascent above the baseline.
    fn update_bounds(&mut self, metrics: &dyn FontMetrics) {
        let m = metrics.measure(&self.text, &self.font);
        self.bounds = Rect::new(self.pos.x, self.pos.y - m.ascent, m.advance, m.line_height);
    }
}

/// Partial update of a text item; `None` leaves the field as is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextEdit {
    pub text: Option<String>,
    pub font: Option<FontDescriptor>,
    pub color: Option<Color>,
}

/// Text overlay in insertion order: first item renders at the back, last on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayer {
    items: Vec<StyledText>,
}

impl TextLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        text: impl Into<String>,
        pos: Point,
        color: Color,
        font: FontDescriptor,
        metrics: &dyn FontMetrics,
    ) -> TextId {
        self.items
            .push(StyledText::new(text, pos, color, font, metrics));
        self.items.len() - 1
    }

    pub fn get(&self, id: TextId) -> Option<&StyledText> {
        self.items.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyledText> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Topmost item whose bounds contain `point`.
    pub fn hit_test(&self, point: Point) -> Option<TextId> {
        self.items
            .iter()
            .rposition(|item| item.bounds.contains(point))
    }

    /// Move the anchor. Text and font are unchanged so the box only shifts.
    pub fn move_to(&mut self, id: TextId, pos: Point) -> bool {
        let Some(item) = self.items.get_mut(id) else {
            return false;
        };
        if item.pos == pos {
            return false;
        }
        let delta = pos - item.pos;
        item.pos = pos;
        item.bounds = item.bounds.translated(delta);
        true
    }

    /// Apply an edit, returning whether any field actually changed.
    pub fn edit(&mut self, id: TextId, edit: TextEdit, metrics: &dyn FontMetrics) -> bool {
        let Some(item) = self.items.get_mut(id) else {
            return false;
        };
        let mut relayout = false;
        let mut changed = false;

        if let Some(text) = edit.text {
            if text != item.text {
                item.text = text;
                relayout = true;
            }
        }
        if let Some(font) = edit.font {
            if font != item.font {
                item.font = font;
                relayout = true;
            }
        }
        if let Some(color) = edit.color {
            if color != item.color {
                item.color = color;
                changed = true;
            }
        }
        if relayout {
            item.update_bounds(metrics);
        }
        changed || relayout
    }
}
