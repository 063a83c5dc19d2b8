//! Buffer: the document the engine edits
//!
//! Hosts expose their text buffer through [`TextDocument`]. [`Buffer`] is a
//! ropey-backed implementation with a single caret, used by hosts without a
//! buffer of their own and by the test suite.
//!
//! All positions are (line, char) pairs: `ch` counts Unicode scalar values,
//! not bytes.

use ropey::Rope;

/// A caret or range endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// Host buffer operations the engine relies on
pub trait TextDocument {
    /// Path of the document; empty for unsaved documents
    fn path(&self) -> &str;
    /// Number of lines
    fn line_count(&self) -> usize;
    /// Text of a line without its line ending
    fn line(&self, line_idx: usize) -> Option<String>;
    /// Current caret position
    fn cursor(&self) -> Position;
    /// Move the caret
    fn set_cursor(&mut self, pos: Position);
    /// Replace the text between `from` and `to` with `text`
    fn replace_range(&mut self, from: Position, to: Position, text: &str);
}

/// Rope-backed document with one caret
#[derive(Debug, Default)]
pub struct Buffer {
    /// Text content stored in a Rope (O(log n) line access)
    rope: Rope,
    /// Vault-relative path, empty when unsaved
    path: String,
    /// Caret
    cursor: Position,
    /// Version counter, bumped on every edit
    pub version: u64,
}

impl Buffer {
    /// Create a new empty, unsaved buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from a string
    pub fn from_string(content: impl AsRef<str>) -> Self {
        Self {
            rope: Rope::from_str(content.as_ref()),
            ..Self::default()
        }
    }

    /// Set the document path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the caret (clamped to the text)
    pub fn with_cursor(mut self, line: usize, ch: usize) -> Self {
        self.set_cursor(Position::new(line, ch));
        self
    }

    /// Get entire content as string
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    /// Type `text` at the caret, leaving the caret after it
    pub fn type_text(&mut self, text: &str) {
        let at = self.cursor;
        self.replace_range(at, at, text);
    }

    /// Length of a line in chars, without its line ending
    pub fn line_len(&self, line_idx: usize) -> Option<usize> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx);
        let mut len = line.len_chars();
        // Strip "\n" or "\r\n"
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        Some(len)
    }

    /// Convert a position to a char index into the rope, clamping to the line
    fn char_index(&self, pos: Position) -> usize {
        let last_line = self.rope.len_lines().saturating_sub(1);
        let line = pos.line.min(last_line);
        let ch = pos.ch.min(self.line_len(line).unwrap_or(0));
        self.rope.line_to_char(line) + ch
    }

    fn clamp(&self, pos: Position) -> Position {
        let last_line = self.rope.len_lines().saturating_sub(1);
        let line = pos.line.min(last_line);
        Position::new(line, pos.ch.min(self.line_len(line).unwrap_or(0)))
    }

    fn position_of(&self, char_idx: usize) -> Position {
        let char_idx = char_idx.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_idx);
        Position::new(line, char_idx - self.rope.line_to_char(line))
    }
}

impl TextDocument for Buffer {
    fn path(&self) -> &str {
        &self.path
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line(&self, line_idx: usize) -> Option<String> {
        let len = self.line_len(line_idx)?;
        Some(self.rope.line(line_idx).slice(..len).to_string())
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.clamp(pos);
    }

    /// A caret at or after the replaced span moves with the text after it;
    /// a caret inside the span lands at the end of the inserted text.
    fn replace_range(&mut self, from: Position, to: Position, text: &str) {
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        let start = self.char_index(from);
        let end = self.char_index(to);
        let caret = self.char_index(self.cursor);

        self.rope.remove(start..end);
        self.rope.insert(start, text);
        self.version += 1;

        let inserted = text.chars().count();
        let new_caret = if caret >= end {
            caret - (end - start) + inserted
        } else if caret > start {
            start + inserted
        } else {
            caret
        };
        self.cursor = self.position_of(new_caret);
    }
}
