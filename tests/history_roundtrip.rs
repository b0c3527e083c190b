use rusty_canvas::{
    CanvasConfig, CanvasEngine, Color, FontDescriptor, HistorySignal, PixelBuffer, Point,
    TextDraft, TextLayer, Tool,
};

fn engine() -> CanvasEngine {
    CanvasEngine::new(
        CanvasConfig::default()
            .with_size(32, 24)
            .with_pen(Color::BLACK, 3)
            .with_airbrush_seed(11),
    )
}

fn say(text: &'static str) -> impl FnMut(&TextDraft) -> Option<TextDraft> {
    move |d: &TextDraft| {
        Some(TextDraft {
            text: text.into(),
            ..d.clone()
        })
    }
}

fn state(e: &CanvasEngine) -> (PixelBuffer, TextLayer) {
    (e.pixels().clone(), e.text_layer().clone())
}

/// Run a mixed sequence of edits, recording the state after each.
fn run_edits(e: &mut CanvasEngine) -> Vec<(PixelBuffer, TextLayer)> {
    let mut states = vec![state(e)];

    e.begin_stroke(Point::new(2, 2));
    e.continue_stroke(Point::new(20, 10));
    e.end_stroke();
    states.push(state(e));

    e.set_tool(Tool::Ellipse);
    e.begin_shape(Point::new(4, 4));
    e.update_shape(Point::new(10, 12));
    e.end_shape(Point::new(28, 20));
    states.push(state(e));

    e.set_pen_color(Color::rgb(0, 128, 0));
    e.fill_at(Point::new(0, 23));
    states.push(state(e));

    e.set_text_style(Color::rgb(0, 0, 255), FontDescriptor::new("Mono", 8.0));
    e.insert_text_at(Point::new(3, 12), &mut say("note")).unwrap();
    states.push(state(e));

    e.apply_blur(3);
    states.push(state(e));

    e.set_tool(Tool::Airbrush);
    e.begin_stroke(Point::new(16, 12));
    e.continue_stroke(Point::new(18, 12));
    e.end_stroke();
    states.push(state(e));

    e.set_canvas_size(40, 30);
    states.push(state(e));

    states
}

#[test]
fn undo_then_redo_reproduces_every_state() {
    let mut e = engine();
    let states = run_edits(&mut e);
    let n = states.len();

    for i in (0..n - 1).rev() {
        e.undo().unwrap();
        assert_eq!(state(&e), states[i], "after undo to state {i}");
    }
    assert_eq!(e.undo(), Err(HistorySignal::NoMoreUndo));

    for i in 1..n {
        e.redo().unwrap();
        assert_eq!(state(&e), states[i], "after redo to state {i}");
    }
    assert_eq!(e.redo(), Err(HistorySignal::NoMoreRedo));
}

#[test]
fn repeated_undo_stops_at_the_floor() {
    let mut e = engine();
    run_edits(&mut e);
    let mut undone = 0;
    while e.undo().is_ok() {
        undone += 1;
    }
    assert_eq!(undone, 7);
    assert_eq!(e.history().undo_len(), 1);
    for _ in 0..3 {
        assert_eq!(e.undo(), Err(HistorySignal::NoMoreUndo));
        assert_eq!(e.history().undo_len(), 1);
    }
    assert!(e.pixels().pixels().iter().all(|&p| p == Color::WHITE));
}

#[test]
fn new_edit_after_undo_discards_redo() {
    let mut e = engine();
    e.apply_brightness(-50);
    e.apply_brightness(-50);
    e.undo().unwrap();
    assert!(e.history().can_redo());

    e.apply_contrast(1.5);
    assert_eq!(e.redo(), Err(HistorySignal::NoMoreRedo));
}

#[test]
fn history_depth_bounds_undo() {
    let mut e = CanvasEngine::new(CanvasConfig::default().with_size(4, 4).with_history_depth(3));
    for _ in 0..10 {
        e.apply_brightness(-10);
    }
    assert_eq!(e.history().undo_len(), 3);
    assert!(e.undo().is_ok());
    assert!(e.undo().is_ok());
    assert_eq!(e.undo(), Err(HistorySignal::NoMoreUndo));
    // floor is the state after the eighth edit
    assert_eq!(e.pixels().get(0, 0), Color::rgb(175, 175, 175));
}

#[test]
fn mutating_live_state_never_reaches_history() {
    let mut e = engine();
    e.apply_brightness(-100);
    let after_edit = e.pixels().clone();
    e.apply_brightness(-100);
    e.undo().unwrap();
    // an edit after undo builds on the restored copy, not on history
    e.begin_stroke(Point::new(1, 1));
    e.end_stroke();
    e.undo().unwrap();
    assert_eq!(e.pixels(), &after_edit);
}
