//! Multi-line text input with a byte-offset cursor and hard wrapping.

use unicode_width::UnicodeWidthChar;

/// Editable input text. `cursor` is a byte offset on a char boundary.
#[derive(Debug, Default, Clone)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

/// Input text laid out for a given width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedInput {
    pub lines: Vec<String>,
    /// (row, column) of the cursor within `lines`.
    pub cursor: (usize, usize),
}

impl InputBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole text and put the cursor at its end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Start of the current logical line.
    pub fn move_home(&mut self) {
        self.cursor = self.text[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
    }

    /// End of the current logical line.
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len());
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Hard-wrap at `width` display columns, honouring explicit newlines.
    pub fn wrap(&self, width: u16) -> WrappedInput {
        let width = width.max(1) as usize;
        let mut lines = vec![String::new()];
        let mut col = 0usize;
        let mut cursor = None;

        for (idx, ch) in self.text.char_indices() {
            if ch == '\n' {
                if idx == self.cursor {
                    // A full row pushes the cursor onto a row of its own
                    if col >= width {
                        lines.push(String::new());
                        col = 0;
                    }
                    cursor = Some((lines.len() - 1, col));
                }
                lines.push(String::new());
                col = 0;
                continue;
            }
            let w = ch.width().unwrap_or(0);
            if col + w > width && col > 0 {
                lines.push(String::new());
                col = 0;
            }
            if idx == self.cursor {
                cursor = Some((lines.len() - 1, col));
            }
            if let Some(line) = lines.last_mut() {
                line.push(ch);
            }
            col += w;
        }

        let cursor = match cursor {
            Some(pos) => pos,
            None if col >= width => {
                lines.push(String::new());
                (lines.len() - 1, 0)
            }
            None => (lines.len() - 1, col),
        };

        WrappedInput { lines, cursor }
    }

    /// Rows needed to show every wrapped line plus the cursor.
    pub fn desired_height(&self, width: u16) -> u16 {
        self.wrap(width).lines.len().min(u16::MAX as usize) as u16
    }
}
