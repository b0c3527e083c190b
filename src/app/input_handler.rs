use crate::app::painter::CanvasEngine;
use crate::app::providers::TextInputProvider;
use crate::app::tools::Tool;
use crate::utils::vector::Point;

/// Primary-button pointer events in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release(Point),
    DoubleClick(Point),
}

/// Route a pointer event to the lifecycle method of the active tool.
///
/// Returns true when the canvas or text layer may have changed and the host
/// should repaint.
pub fn handle_pointer(
    engine: &mut CanvasEngine,
    event: PointerEvent,
    text_input: &mut dyn TextInputProvider,
) -> bool {
    let tool = engine.tool();
    match event {
        PointerEvent::Press(pos) => match tool {
            Tool::Brush | Tool::Airbrush | Tool::Eraser => {
                engine.begin_stroke(pos);
                true
            }
            Tool::Line | Tool::Rect | Tool::Ellipse => {
                engine.begin_shape(pos);
                false
            }
            Tool::Bucket => engine.fill_at(pos),
            Tool::Text => engine.insert_text_at(pos, text_input).is_some(),
            Tool::TextSelect => {
                // a miss still clears the old selection highlight
                engine.begin_drag(pos);
                true
            }
        },
        PointerEvent::Move(pos) => {
            if !engine.is_interacting() {
                return false;
            }
            match tool {
                Tool::Brush | Tool::Airbrush | Tool::Eraser => engine.continue_stroke(pos),
                Tool::Line | Tool::Rect | Tool::Ellipse => engine.update_shape(pos),
                Tool::TextSelect => engine.drag_to(pos),
                Tool::Bucket | Tool::Text => return false,
            }
            true
        }
        PointerEvent::Release(pos) => {
            if !engine.is_interacting() {
                return false;
            }
            match tool {
                Tool::Brush | Tool::Airbrush | Tool::Eraser => engine.end_stroke(),
                Tool::Line | Tool::Rect | Tool::Ellipse => engine.end_shape(pos),
                Tool::TextSelect => {
                    engine.end_drag();
                }
                Tool::Bucket | Tool::Text => return false,
            }
            true
        }
        PointerEvent::DoubleClick(pos) => {
            tool == Tool::TextSelect && engine.edit_text_at(pos, text_input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::providers::TextDraft;
    use crate::app::state::CanvasConfig;
    use crate::utils::color::Color;
    use crate::utils::fonts::FontDescriptor;

    fn no_text(_: &TextDraft) -> Option<TextDraft> {
        None
    }

    #[test]
    fn rect_drag_commits_once() {
        let mut e = CanvasEngine::new(
            CanvasConfig::default().with_size(12, 12).with_pen(Color::BLACK, 1),
        );
        e.set_tool(Tool::Rect);
        handle_pointer(&mut e, PointerEvent::Press(Point::new(2, 2)), &mut no_text);
        handle_pointer(&mut e, PointerEvent::Move(Point::new(5, 5)), &mut no_text);
        handle_pointer(&mut e, PointerEvent::Move(Point::new(9, 9)), &mut no_text);
        handle_pointer(&mut e, PointerEvent::Release(Point::new(9, 9)), &mut no_text);
        assert_eq!(e.history().undo_len(), 2);
        assert_eq!(e.pixels().get(9, 5), Color::BLACK);
        assert_eq!(e.pixels().get(5, 5), Color::WHITE);
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut e = CanvasEngine::new(CanvasConfig::default().with_size(8, 8));
        assert!(!handle_pointer(&mut e, PointerEvent::Move(Point::new(3, 3)), &mut no_text));
        assert!(!handle_pointer(&mut e, PointerEvent::Release(Point::new(3, 3)), &mut no_text));
        assert!(e.pixels().pixels().iter().all(|&p| p == Color::WHITE));
    }

    #[test]
    fn double_click_opens_text_edit() {
        let mut e = CanvasEngine::new(CanvasConfig::default().with_size(60, 60));
        e.set_text_style(Color::BLACK, FontDescriptor::new("Mono", 10.0));
        e.set_tool(Tool::Text);
        let mut hello = |d: &TextDraft| {
            Some(TextDraft {
                text: "hello".into(),
                ..d.clone()
            })
        };
        assert!(handle_pointer(&mut e, PointerEvent::Press(Point::new(4, 30)), &mut hello));

        e.set_tool(Tool::TextSelect);
        let mut shout = |d: &TextDraft| {
            Some(TextDraft {
                text: d.text.to_uppercase(),
                ..d.clone()
            })
        };
        assert!(handle_pointer(&mut e, PointerEvent::DoubleClick(Point::new(6, 28)), &mut shout));
        assert_eq!(e.text_layer().get(0).unwrap().text, "HELLO");
        assert_eq!(e.selected_text(), Some(0));
    }
}
