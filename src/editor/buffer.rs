use ropey::Rope;
use unicode_width::UnicodeWidthChar;

/// Line and byte column of the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Byte offset within the line.
    pub col: usize,
}

impl Cursor {
    pub const fn at(line: usize, col: usize) -> Self {
        Self { line, col }
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

/// Rope-backed mirror of the box text with a caret.
///
/// The buffer is not the source of truth: every change it reports is
/// recorded in the attribute history, and undo/redo push the live text
/// back in with [`TextBuffer::replace_text`].
pub struct TextBuffer {
    rope: Rope,
    /// Char index into the rope, `0..=len_chars`.
    caret: usize,
    /// Screen column kept across runs of Up/Down.
    goal_column: Option<usize>,
}

impl TextBuffer {
    /// Create a buffer from a string with the caret at the end.
    pub fn from_text(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let caret = rope.len_chars();
        Self {
            rope,
            caret,
            goal_column: None,
        }
    }

    /// Line and byte column of the caret.
    pub fn cursor(&self) -> Cursor {
        let line = self.rope.char_to_line(self.caret);
        let col = self.rope.char_to_byte(self.caret) - self.rope.line_to_byte(line);
        Cursor { line, col }
    }

    /// Screen column of the caret within its line.
    pub fn cursor_display_col(&self) -> usize {
        let line = self.rope.char_to_line(self.caret);
        let start = self.rope.line_to_char(line);
        self.rope
            .slice(start..self.caret)
            .chars()
            .map(|ch| ch.width().unwrap_or(0))
            .sum()
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of a line without its line break.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        let line = self.rope.get_line(line_idx)?;
        let mut text = line.to_string();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Some(text)
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Swap in new content. The caret keeps its line and column when they
    /// still exist and is clamped otherwise.
    pub fn replace_text(&mut self, text: &str) {
        if self.rope == text {
            return;
        }
        let Cursor { line, col } = self.cursor();
        self.rope = Rope::from_str(text);
        self.move_to(line, col);
    }

    pub fn insert_char(&mut self, ch: char) {
        self.rope.insert_char(self.caret, ch);
        self.caret += 1;
        self.goal_column = None;
    }

    /// Break the line at the caret (Enter).
    pub fn split_line(&mut self) {
        self.insert_char('\n');
    }

    /// Remove the char before the caret (Backspace). Returns `true` if the
    /// text changed.
    pub fn delete_back(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.rope.remove(self.caret - 1..self.caret);
        self.caret -= 1;
        self.goal_column = None;
        true
    }

    /// Remove the char under the caret (Delete). Returns `true` if the
    /// text changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(self.caret..=self.caret);
        self.goal_column = None;
        true
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.set_caret(self.caret.saturating_sub(1)),
            Direction::Right => self.set_caret((self.caret + 1).min(self.rope.len_chars())),
            Direction::Up => self.move_vertical(false),
            Direction::Down => self.move_vertical(true),
        }
    }

    pub fn move_home(&mut self) {
        let line = self.rope.char_to_line(self.caret);
        self.set_caret(self.rope.line_to_char(line));
    }

    pub fn move_end(&mut self) {
        let line = self.rope.char_to_line(self.caret);
        self.set_caret(self.line_end(line));
    }

    /// Place the caret at a line and byte column, clamped to the buffer
    /// and snapped back to a char boundary.
    pub fn move_to(&mut self, line: usize, col: usize) {
        let line = line.min(self.line_count().saturating_sub(1));
        let text = self.line_at(line).unwrap_or_default();
        let mut col = col.min(text.len());
        while !text.is_char_boundary(col) {
            col -= 1;
        }
        let chars = text[..col].chars().count();
        self.set_caret(self.rope.line_to_char(line) + chars);
    }

    /// Place the caret at a line and screen column, e.g. from a click.
    ///
    /// A click on either half of a wide char lands before it.
    pub fn move_to_display(&mut self, line: usize, display_col: usize) {
        let line = line.min(self.line_count().saturating_sub(1));
        let caret = self.caret_at_display(line, display_col);
        self.set_caret(caret);
    }

    const fn set_caret(&mut self, caret: usize) {
        self.caret = caret;
        self.goal_column = None;
    }

    /// Char index just before the line break of `line`.
    fn line_end(&self, line: usize) -> usize {
        let start = self.rope.line_to_char(line);
        let len = self.line_at(line).map_or(0, |text| text.chars().count());
        start + len
    }

    fn caret_at_display(&self, line: usize, display_col: usize) -> usize {
        let start = self.rope.line_to_char(line);
        let text = self.line_at(line).unwrap_or_default();
        let mut width = 0;
        for (offset, ch) in text.chars().enumerate() {
            let w = ch.width().unwrap_or(0);
            if width + w > display_col {
                return start + offset;
            }
            width += w;
        }
        self.line_end(line)
    }

    fn move_vertical(&mut self, down: bool) {
        let line = self.rope.char_to_line(self.caret);
        let target = if down {
            line + 1
        } else if let Some(up) = line.checked_sub(1) {
            up
        } else {
            return;
        };
        if target >= self.line_count() {
            return;
        }
        let goal = self
            .goal_column
            .unwrap_or_else(|| self.cursor_display_col());
        self.caret = self.caret_at_display(target, goal);
        self.goal_column = Some(goal);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field("chars", &self.rope.len_chars())
            .field("lines", &self.rope.len_lines())
            .field("cursor", &self.cursor())
            .finish()
    }
}
