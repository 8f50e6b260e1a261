/// Cursor-aware text buffer backing the focused text field.
///
/// The buffer does no filtering of its own. Each edit yields the raw text the
/// field would see, and the field decides what survives.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    pub value: String, // text buffer
    pub cursor: usize, // char index, 0..=len
}

impl InputBuffer {
    /// Raw text with `ch` inserted at the cursor. The buffer itself is untouched.
    pub fn with_inserted(&self, ch: char) -> String {
        let mut raw = self.value.clone();
        raw.insert(self.byte_index(self.cursor), ch);
        raw
    }

    /// Raw text with the char before the cursor removed.
    pub fn with_backspace(&self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let mut raw = self.value.clone();
        raw.remove(self.byte_index(self.cursor - 1));
        Some(raw)
    }

    /// Raw text with the char under the cursor removed.
    pub fn with_delete(&self) -> Option<String> {
        if self.cursor >= self.len() {
            return None;
        }
        let mut raw = self.value.clone();
        raw.remove(self.byte_index(self.cursor));
        Some(raw)
    }

    /// Replace the text after the field accepted it. The cursor keeps its
    /// distance from the end of the text, which survives characters being
    /// stripped in front of it.
    pub fn accept(&mut self, text: &str, cursor_from_end: usize) {
        self.value = text.to_string();
        self.cursor = self.len().saturating_sub(cursor_from_end);
    }

    pub fn left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Chars between the cursor and the end of the text.
    pub fn tail_len(&self) -> usize {
        self.len() - self.cursor
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(idx, _)| idx)
    }
}

impl From<String> for InputBuffer {
    fn from(value: String) -> Self {
        let len = value.chars().count();
        InputBuffer { value, cursor: len }
    }
}
