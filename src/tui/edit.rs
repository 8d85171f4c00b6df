/// Single-line text buffer with a byte-offset cursor that always sits on a
/// char boundary.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    pub text: String,
    pub cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: String) -> Self {
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Takes the contents, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_backward(&mut self) {
        let before = &self.text[..self.cursor];
        let trimmed = before.trim_end();
        let word_start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);

        self.text.replace_range(word_start..self.cursor, "");
        self.cursor = word_start;
    }

    /// Text split around the cursor, for rendering.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.cursor)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}

/// The item currently being edited, if any, and its unsaved draft.
#[derive(Debug, Clone, Default)]
pub struct EditState {
    pub target: Option<u64>,
    pub draft: TextBuffer,
}

impl EditState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_editing_item(&self, id: u64) -> bool {
        self.target == Some(id)
    }

    /// Starts editing `id`. Any draft for a previous target is dropped.
    pub fn begin(&mut self, id: u64, text: String) {
        self.target = Some(id);
        self.draft = TextBuffer::with_text(text);
    }

    /// Ends the edit and hands back the target and its draft.
    pub fn finish(&mut self) -> Option<(u64, String)> {
        let id = self.target.take()?;
        Some((id, self.draft.take()))
    }

    pub fn discard(&mut self) {
        self.target = None;
        self.draft.clear();
    }
}
