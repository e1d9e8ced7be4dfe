//! Line/column addressed text buffers.
//!
//! The trigger machine and the insertion engine only ever talk to a buffer
//! through [`TextBuffer`], so any editor can be adapted by implementing it.

use serde::Serialize;

/// A cursor position. `ch` counts Unicode scalar values from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column, in chars.
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }

    /// Same line, `n` columns to the left (stops at column 0).
    pub fn back(self, n: usize) -> Self {
        Self { line: self.line, ch: self.ch.saturating_sub(n) }
    }

    /// Same line, `n` columns to the right.
    pub fn forward(self, n: usize) -> Self {
        Self { line: self.line, ch: self.ch + n }
    }
}

/// A mutable text document addressed by [`Position`].
///
/// Positions outside the document are clipped: a column past the end of its
/// line means the end of that line, and a line past the last line means the
/// end of the document. A range whose end precedes its start is empty.
pub trait TextBuffer {
    /// Number of lines (a trailing newline opens an empty last line).
    fn line_count(&self) -> usize;

    /// Text of a single line without its line terminator.
    fn line(&self, line: usize) -> Option<String>;

    /// Text between two positions.
    fn get_range(&self, from: Position, to: Position) -> String;

    /// Replace the text between two positions.
    fn replace_range(&mut self, text: &str, from: Position, to: Position);

    /// Full document text.
    fn text(&self) -> String;
}

/// In-memory [`TextBuffer`] backed by a single `String`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Position just past the last character of the document.
    pub fn end(&self) -> Position {
        let starts = self.line_starts();
        let last = starts.len() - 1;
        Position::new(last, self.text[starts[last]..].chars().count())
    }

    /// Insert `c` at `cursor` and return the cursor after the inserted char.
    pub fn insert_char(&mut self, cursor: Position, c: char) -> Position {
        let cursor = self.clip(cursor);
        let mut encoded = [0u8; 4];
        self.replace_range(c.encode_utf8(&mut encoded), cursor, cursor);
        if c == '\n' { Position::new(cursor.line + 1, 0) } else { cursor.forward(1) }
    }

    /// Clip a position into the document.
    pub fn clip(&self, pos: Position) -> Position {
        let starts = self.line_starts();
        if pos.line >= starts.len() {
            return self.end();
        }
        let (start, end) = self.line_bounds(&starts, pos.line);
        Position::new(pos.line, pos.ch.min(self.text[start..end].chars().count()))
    }

    fn line_starts(&self) -> Vec<usize> {
        std::iter::once(0)
            .chain(self.text.match_indices('\n').map(|(i, _)| i + 1))
            .collect()
    }

    fn line_bounds(&self, starts: &[usize], line: usize) -> (usize, usize) {
        let start = starts[line];
        let end = starts.get(line + 1).map_or(self.text.len(), |next| next - 1);
        (start, end)
    }

    /// Byte offset of a clipped position.
    fn offset(&self, pos: Position) -> usize {
        let starts = self.line_starts();
        if pos.line >= starts.len() {
            return self.text.len();
        }
        let (start, end) = self.line_bounds(&starts, pos.line);
        let line = &self.text[start..end];
        start + line.char_indices().nth(pos.ch).map_or(line.len(), |(i, _)| i)
    }
}

impl TextBuffer for StringBuffer {
    fn line_count(&self) -> usize {
        self.line_starts().len()
    }

    fn line(&self, line: usize) -> Option<String> {
        let starts = self.line_starts();
        if line >= starts.len() {
            return None;
        }
        let (start, end) = self.line_bounds(&starts, line);
        Some(self.text[start..end].to_string())
    }

    fn get_range(&self, from: Position, to: Position) -> String {
        let (from, to) = (self.offset(from), self.offset(to));
        if from >= to {
            return String::new();
        }
        self.text[from..to].to_string()
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) {
        let (a, b) = (self.offset(from), self.offset(to));
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        self.text.replace_range(a..b, text);
    }

    fn text(&self) -> String {
        self.text.clone()
    }
}
