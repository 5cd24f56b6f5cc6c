//! Single-line text input with a cursor
//!
//! Backs the search bar, the cell editor and the directory prompt. The cursor
//! is a char index, not a byte offset.

use crate::input_key::InputKey;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    text: String,
    cursor: usize,
}

impl LineInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input pre-filled with `text`, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    pub fn insert(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.text.insert(offset, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let offset = self.byte_offset(self.cursor);
        self.text.remove(offset);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let offset = self.byte_offset(self.cursor);
            self.text.remove(offset);
        }
    }

    /// Apply an editing key. Returns whether the key was consumed.
    ///
    /// Enter, Esc and Tab are left to the caller.
    pub fn handle_key(&mut self, key: InputKey) -> bool {
        match key {
            InputKey::Char(c) => self.insert(c),
            InputKey::Backspace => self.backspace(),
            InputKey::Delete => self.delete(),
            InputKey::Left => self.cursor = self.cursor.saturating_sub(1),
            InputKey::Right => self.cursor = (self.cursor + 1).min(self.text.chars().count()),
            InputKey::Home | InputKey::CharCtrl('a') => self.cursor = 0,
            InputKey::End | InputKey::CharCtrl('e') => self.cursor = self.text.chars().count(),
            InputKey::CharCtrl('u') => self.clear(),
            _ => return false,
        }
        true
    }
}
