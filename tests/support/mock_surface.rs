use ropey::Rope;
use std::cell::OnceCell;
use textarea_keys::{Engine, InputState, KeyEvent, SelectionDirection, TextSurface, apply_action};

/// Rope-backed stand-in for a host text area.
///
/// Edits go to the rope; the flat text is only rebuilt when someone reads it.
pub struct MockSurface {
    rope: Rope,
    flat: OnceCell<String>,
    selection: (usize, usize, SelectionDirection),
    pub input_events: usize,
    pub selection_events: usize,
}

impl MockSurface {
    pub fn new(text: &str, start: usize, end: usize) -> Self {
        Self {
            rope: Rope::from_str(text),
            flat: OnceCell::new(),
            selection: (start, end, SelectionDirection::Forward),
            input_events: 0,
            selection_events: 0,
        }
    }

    pub fn caret(text: &str, caret: usize) -> Self {
        Self::new(text, caret, caret)
    }

    pub fn text(&self) -> &str {
        self.value()
    }

    pub fn range(&self) -> (usize, usize) {
        (self.selection.0, self.selection.1)
    }

    /// Routes a key through the engine the way a host adapter would.
    /// Returns whether the default key handling was suppressed.
    pub fn press(&mut self, engine: &Engine, key: impl Into<KeyEvent>) -> bool {
        let state = InputState::capture(self);
        let action = engine.handle_key(&state, key.into());
        apply_action(self, &action)
    }
}

impl TextSurface for MockSurface {
    fn value(&self) -> &str {
        self.flat.get_or_init(|| self.rope.to_string())
    }

    fn selection(&self) -> (usize, usize, SelectionDirection) {
        self.selection
    }

    fn replace_range(&mut self, start: usize, end: usize, text: &str) {
        let start = self.rope.byte_to_char(start);
        let end = self.rope.byte_to_char(end);
        self.rope.remove(start..end);
        self.rope.insert(start, text);
        self.flat.take();
    }

    fn set_selection(&mut self, start: usize, end: usize, direction: SelectionDirection) {
        self.selection = (start, end, direction);
    }

    fn notify_input(&mut self) {
        self.input_events += 1;
    }

    fn notify_selection_change(&mut self) {
        self.selection_events += 1;
    }
}
