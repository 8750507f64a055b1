use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// Single-line editable text with a byte-offset cursor on grapheme boundaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    buffer: String,
    cursor: usize,
    /// Horizontal scroll in cells, kept by the renderer
    pub scroll: usize,
}

impl TextField {
    /// Field pre-filled with `text`, cursor at the end
    pub fn with_text(text: &str) -> Self {
        TextField {
            buffer: text.to_string(),
            cursor: text.len(),
            scroll: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Empty the field and hand back what it held
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        self.scroll = 0;
        std::mem::take(&mut self.buffer)
    }

    pub fn clear(&mut self) {
        self.take();
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text, flattening newlines to spaces
    pub fn insert_str(&mut self, text: &str) {
        let clean = text.replace('\r', "").replace('\n', " ");
        self.buffer.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    pub fn delete_word_left(&mut self) {
        let start = unicode::word_boundary_left(&self.buffer, self.cursor);
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Apply an editing key. Returns false for keys the field does not handle
    /// (Enter, Esc, Tab, ...), leaving them to the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => self.clear(),
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => self.delete_word_left(),
            (KeyModifiers::CONTROL, KeyCode::Char('a')) => self.move_home(),
            (KeyModifiers::CONTROL, KeyCode::Char('e')) => self.move_end(),
            (m, KeyCode::Char(c)) if m == KeyModifiers::NONE || m == KeyModifiers::SHIFT => {
                self.insert_char(c)
            }
            (_, KeyCode::Backspace) => self.backspace(),
            (_, KeyCode::Delete) => self.delete(),
            (_, KeyCode::Left) => self.move_left(),
            (_, KeyCode::Right) => self.move_right(),
            (_, KeyCode::Home) => self.move_home(),
            (_, KeyCode::End) => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Cell column of the cursor relative to the visible window
    pub fn visible_cursor_col(&self) -> usize {
        unicode::display_width(&self.buffer[..self.cursor]).saturating_sub(self.scroll)
    }

    /// Update `scroll` for a window `width` cells wide and return the visible text
    pub fn visible_text(&mut self, width: usize) -> &str {
        self.scroll = unicode::scroll_for_cursor(&self.buffer, self.cursor, width, self.scroll);
        unicode::skip_cells(&self.buffer, self.scroll)
    }
}
