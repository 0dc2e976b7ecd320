use ropey::Rope;

/// Cursor position inside an [`EditorBuffer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Byte offset within the line, always on a char boundary.
    pub col: usize,
    /// Column to return to when moving vertically through shorter lines.
    sticky_col: usize,
}

impl Cursor {
    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            sticky_col: col,
        }
    }

    const fn jump_col(&mut self, col: usize) {
        self.col = col;
        self.sticky_col = col;
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Rope-backed text of the document being edited, plus a cursor.
pub struct EditorBuffer {
    rope: Rope,
    cursor: Cursor,
}

impl EditorBuffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Cursor::default(),
        }
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Line content without its line ending.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let mut line = self.rope.line(line_idx).to_string();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Some(line)
    }

    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |l| l.len())
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.insert_newline();
            return;
        }
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, ch);
        self.cursor.jump_col(self.cursor.col + ch.len_utf8());
    }

    /// Break the line at the cursor.
    pub fn insert_newline(&mut self) {
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, '\n');
        self.cursor.line += 1;
        self.cursor.jump_col(0);
    }

    /// Backspace. Returns `false` at the start of the buffer.
    pub fn delete_back(&mut self) -> bool {
        let idx = self.cursor_char_idx();
        if idx == 0 {
            return false;
        }
        if self.cursor.col == 0 {
            let prev = self.cursor.line - 1;
            let prev_len = self.line_len(prev);
            // The previous line's ending may be "\r\n".
            let ending_start = self.rope.line_to_char(prev)
                + self.line_at(prev).map_or(0, |l| l.chars().count());
            self.rope.remove(ending_start..idx);
            self.cursor.line = prev;
            self.cursor.jump_col(prev_len);
        } else {
            let width = self.prev_char_len();
            self.rope.remove(idx - 1..idx);
            self.cursor.jump_col(self.cursor.col - width);
        }
        true
    }

    /// Delete under the cursor. Returns `false` at the end of the buffer.
    pub fn delete_forward(&mut self) -> bool {
        let idx = self.cursor_char_idx();
        if idx >= self.rope.len_chars() {
            return false;
        }
        if self.cursor.col >= self.line_len(self.cursor.line) {
            let next_line_start = self.rope.line_to_char(self.cursor.line + 1);
            self.rope.remove(idx..next_line_start);
        } else {
            self.rope.remove(idx..=idx);
        }
        true
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let line_len = self.line_len(self.cursor.line);
        if self.cursor.col > line_len {
            self.cursor.jump_col(line_len);
        }
        match direction {
            Direction::Left => {
                if self.cursor.col > 0 {
                    let width = self.prev_char_len();
                    self.cursor.jump_col(self.cursor.col - width);
                } else if self.cursor.line > 0 {
                    self.cursor.line -= 1;
                    self.cursor.jump_col(self.line_len(self.cursor.line));
                }
            }
            Direction::Right => {
                let line = self.line_at(self.cursor.line).unwrap_or_default();
                let rest = line.get(self.cursor.col..).unwrap_or_default();
                if let Some(ch) = rest.chars().next() {
                    self.cursor.jump_col(self.cursor.col + ch.len_utf8());
                } else if self.cursor.line + 1 < self.line_count() {
                    self.cursor.line += 1;
                    self.cursor.jump_col(0);
                }
            }
            Direction::Up => {
                if self.cursor.line > 0 {
                    self.move_vertically_to(self.cursor.line - 1);
                }
            }
            Direction::Down => {
                if self.cursor.line + 1 < self.line_count() {
                    self.move_vertically_to(self.cursor.line + 1);
                }
            }
        }
    }

    pub const fn move_home(&mut self) {
        self.cursor.jump_col(0);
    }

    pub fn move_end(&mut self) {
        self.cursor.jump_col(self.line_len(self.cursor.line));
    }

    pub const fn move_to_start(&mut self) {
        self.cursor = Cursor::at(0, 0);
    }

    pub fn move_to_end(&mut self) {
        let last = self.line_count().saturating_sub(1);
        self.cursor = Cursor::at(last, self.line_len(last));
    }

    fn move_vertically_to(&mut self, line: usize) {
        self.cursor.line = line;
        let text = self.line_at(line).unwrap_or_default();
        self.cursor.col = floor_char_boundary(&text, self.cursor.sticky_col);
    }

    fn prev_char_len(&self) -> usize {
        let line = self.line_at(self.cursor.line).unwrap_or_default();
        line[..floor_char_boundary(&line, self.cursor.col)]
            .chars()
            .next_back()
            .map_or(1, char::len_utf8)
    }

    fn cursor_char_idx(&self) -> usize {
        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let col = self.cursor.col.min(line.len());
        self.rope.line_to_char(self.cursor.line) + line[..col].chars().count()
    }
}

/// Largest char boundary in `text` that is `<= col`.
fn floor_char_boundary(text: &str, col: usize) -> usize {
    if col >= text.len() {
        return text.len();
    }
    (0..=col).rev().find(|&i| text.is_char_boundary(i)).unwrap_or(0)
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field("lines", &self.rope.len_lines())
            .field("cursor", &self.cursor)
            .finish()
    }
}
