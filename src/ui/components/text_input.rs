use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Single-line text buffer with a cursor counted in characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor_position: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer pre-filled with `text`, cursor at the end.
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor_position: text.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_position = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_index(self.cursor_position);
        self.buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            let byte_pos = self.byte_index(self.cursor_position - 1);
            self.buffer.remove(byte_pos);
            self.cursor_position -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_position < self.char_count() {
            let byte_pos = self.byte_index(self.cursor_position);
            self.buffer.remove(byte_pos);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    /// Apply an editing key. Returns false for keys the buffer does not use.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert_char(c)
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Text left of the cursor, used to place the terminal cursor.
    pub fn before_cursor(&self) -> &str {
        &self.buffer[..self.byte_index(self.cursor_position)]
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}
