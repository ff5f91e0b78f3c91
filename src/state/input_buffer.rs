//! Multiline text buffer behind the input area.
//!
//! Pure state transitions, no I/O. The cursor is a character index
//! (not a byte offset) so multi-byte input never splits a code point.

/// Raw text typed or pasted by the user, plus the edit cursor.
///
/// # Invariants
/// - `cursor <= text.chars().count()`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    /// Empty buffer with the cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer pre-filled with `text`, cursor at the end.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = normalize_newlines(&text.into());
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// The raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    /// Insert a character at the cursor and advance past it.
    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert a line break at the cursor.
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Insert pasted text at the cursor. CRLF and CR are normalized to LF.
    pub fn insert_str(&mut self, s: &str) {
        let s = normalize_newlines(s);
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, &s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.len_chars() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Move left, saturating at 0.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move right, saturating at the end.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len_chars());
    }

    /// Move to the start of the current line.
    pub fn move_home(&mut self) {
        let (_, col) = self.cursor_line_col();
        self.cursor -= col;
    }

    /// Move to the end of the current line.
    pub fn move_end(&mut self) {
        let (line, col) = self.cursor_line_col();
        let line_len = self.line_len(line);
        self.cursor += line_len - col;
    }

    /// Move to the previous line, keeping the column where possible.
    pub fn move_up(&mut self) {
        let (line, col) = self.cursor_line_col();
        if line == 0 {
            return;
        }
        self.cursor = self.index_of(line - 1, col);
    }

    /// Move to the next line, keeping the column where possible.
    pub fn move_down(&mut self) {
        let (line, col) = self.cursor_line_col();
        if line + 1 >= self.line_count() {
            return;
        }
        self.cursor = self.index_of(line + 1, col);
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Number of lines (an empty buffer has one empty line).
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn line_len(&self, line: usize) -> usize {
        self.text
            .split('\n')
            .nth(line)
            .map(|l| l.chars().count())
            .unwrap_or(0)
    }

    /// Character index of (`line`, `col`), with `col` clamped to the line.
    fn index_of(&self, line: usize, col: usize) -> usize {
        let before: usize = self
            .text
            .split('\n')
            .take(line)
            .map(|l| l.chars().count() + 1)
            .sum();
        before + col.min(self.line_len(line))
    }

    /// 0-based (line, column) of the cursor, in characters.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for ch in self.text.chars().take(self.cursor) {
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}
