use std::collections::VecDeque;

use crate::canvas::pixel_buffer::PixelBuffer;
use crate::canvas::text_layer::TextLayer;

/// Deep copy of the composite canvas state captured after one user edit.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub pixels: PixelBuffer,
    pub text: TextLayer,
}

impl Snapshot {
    pub fn capture(pixels: &PixelBuffer, text: &TextLayer) -> Self {
        Self {
            pixels: pixels.clone(),
            text: text.clone(),
        }
    }
}

/// Returned when history cannot move in the requested direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistorySignal {
    NoMoreUndo,
    NoMoreRedo,
}

impl std::fmt::Display for HistorySignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistorySignal::NoMoreUndo => write!(f, "No more undo steps."),
            HistorySignal::NoMoreRedo => write!(f, "No more redo steps."),
        }
    }
}

/// Bounded undo/redo stacks of whole-canvas snapshots.
///
/// The top of the undo stack is always the live state, so undoing pops it
/// onto redo and hands back the entry underneath. The bottom entry is the
/// floor and is only ever dropped by capacity eviction.
pub struct History {
    capacity: usize,
    undo_stack: VecDeque<Snapshot>,
    redo_stack: VecDeque<Snapshot>,
}

impl History {
    /// Start a history whose floor is `initial`.
    pub fn new(capacity: usize, initial: Snapshot) -> Self {
        let capacity = capacity.max(1);
        let mut undo_stack = VecDeque::with_capacity(capacity);
        undo_stack.push_back(initial);
        Self {
            capacity,
            undo_stack,
            redo_stack: VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Record the state after an edit and drop the redo timeline.
    pub fn push_snapshot(&mut self, pixels: &PixelBuffer, text: &TextLayer) {
        push_bounded(
            &mut self.undo_stack,
            Snapshot::capture(pixels, text),
            self.capacity,
        );
        self.redo_stack.clear();
    }

    /// Step back one edit, returning a copy of the state to restore.
    pub fn undo(&mut self) -> Result<Snapshot, HistorySignal> {
        if self.undo_stack.len() <= 1 {
            return Err(HistorySignal::NoMoreUndo);
        }
        let Some(last) = self.undo_stack.pop_back() else {
            return Err(HistorySignal::NoMoreUndo);
        };
        push_bounded(&mut self.redo_stack, last, self.capacity);
        self.undo_stack
            .back()
            .cloned()
            .ok_or(HistorySignal::NoMoreUndo)
    }

    /// Re-apply the most recently undone edit, returning a copy of it.
    pub fn redo(&mut self) -> Result<Snapshot, HistorySignal> {
        let snapshot = self.redo_stack.pop_back().ok_or(HistorySignal::NoMoreRedo)?;
        let restored = snapshot.clone();
        push_bounded(&mut self.undo_stack, snapshot, self.capacity);
        Ok(restored)
    }
}

fn push_bounded(stack: &mut VecDeque<Snapshot>, snapshot: Snapshot, capacity: usize) {
    stack.push_back(snapshot);
    while stack.len() > capacity {
        stack.pop_front();
    }
}
