//! Single-line text editing (pure state transitions).
//!
//! Used for both the composer draft and the contact filter. The cursor is a
//! character index, so multi-byte input never splits a code point.

/// Text being edited plus cursor position (in chars, `0..=len`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Start editing `text` with the cursor at its end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

/// Insert `ch` at the cursor and advance past it.
pub fn insert_char(mut input: TextInput, ch: char) -> TextInput {
    let at = input.byte_index(input.cursor);
    input.text.insert(at, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor. No-op at position 0.
pub fn backspace(mut input: TextInput) -> TextInput {
    if input.cursor == 0 {
        return input;
    }
    let at = input.byte_index(input.cursor - 1);
    input.text.remove(at);
    input.cursor -= 1;
    input
}

/// Delete the character under the cursor. No-op at the end.
pub fn delete(mut input: TextInput) -> TextInput {
    if input.cursor < input.text.chars().count() {
        let at = input.byte_index(input.cursor);
        input.text.remove(at);
    }
    input
}

/// Move the cursor one character left, saturating at 0.
pub fn cursor_left(mut input: TextInput) -> TextInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move the cursor one character right, saturating at the end.
pub fn cursor_right(mut input: TextInput) -> TextInput {
    input.cursor = (input.cursor + 1).min(input.text.chars().count());
    input
}

/// Jump to the start.
pub fn cursor_home(mut input: TextInput) -> TextInput {
    input.cursor = 0;
    input
}

/// Jump to the end.
pub fn cursor_end(mut input: TextInput) -> TextInput {
    input.cursor = input.text.chars().count();
    input
}

#[cfg(test)]
#[path = "text_input_tests.rs"]
mod tests;
