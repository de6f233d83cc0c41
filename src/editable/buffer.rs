//! The document value and the line/offset helpers every editor builds on.
//!
//! A [`Document`] is never edited in place by collaborators: each edit
//! produces a new value. It is backed by a `ropey::Rope`, so cloning a
//! document for the history stack shares structure instead of copying text.

use ropey::Rope;
use std::ops::Range;

use super::position::Position;

/// Immutable-per-edit document text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    rope: Rope,
}

impl Document {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a document from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Join lines with `\n` into a new document
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut text = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }
        Self::from_text(&text)
    }

    /// Access the underlying rope
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Full content as a String
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Number of lines (always >= 1; a trailing newline starts an empty line)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    /// Index of the last line
    pub fn last_line(&self) -> usize {
        self.line_count() - 1
    }

    /// Line content without its trailing `\n`
    pub fn line(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let mut s = self.rope.line(line).to_string();
        if s.ends_with('\n') {
            s.pop();
        }
        Some(s)
    }

    /// Length of a line in characters (excluding the newline)
    pub fn line_length(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// All lines, split on `\n`
    pub fn lines(&self) -> Vec<String> {
        (0..self.rope.len_lines().max(1))
            .map(|i| self.line(i).unwrap_or_default())
            .collect()
    }

    /// Convert a character offset to a line/column position.
    /// The offset is clamped to `[0, len_chars]`.
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let clamped = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(clamped);
        let line_start = self.rope.line_to_char(line);
        Position::new(line, clamped - line_start)
    }

    /// Convert a line/column position to a character offset.
    /// The line is clamped to the last line, the column to the line length.
    pub fn position_to_offset(&self, pos: Position) -> usize {
        let line = pos.line.min(self.last_line());
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line) + pos.column.min(self.line_length(line))
    }

    /// Text in a character range (clamped)
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    /// Return a new document with `range` replaced by `text`
    pub fn replace(&self, range: Range<usize>, text: &str) -> Document {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        let mut rope = self.rope.clone();
        if start < end {
            rope.remove(start..end);
        }
        if !text.is_empty() {
            rope.insert(start, text);
        }
        Document { rope }
    }
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

/// Append spaces until `line` is `col` characters long; no-op if it already is
pub fn pad_line_to_column(line: &str, col: usize) -> String {
    let len = line.chars().count();
    if len >= col {
        return line.to_string();
    }
    let mut padded = String::with_capacity(line.len() + (col - len));
    padded.push_str(line);
    padded.extend(std::iter::repeat(' ').take(col - len));
    padded
}

/// Strip trailing whitespace from every `\n`-separated line
pub fn strip_trailing_whitespace(text: &str) -> String {
    text.split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Characters `[start, end)` of a line, clamped to its length
pub fn char_substring(line: &str, start: usize, end: usize) -> String {
    if end <= start {
        return String::new();
    }
    line.chars().skip(start).take(end - start).collect()
}

/// Replace characters `[start, end)` of a line with `replacement`.
///
/// Both bounds are clamped to the line length, so splicing past the end of
/// a short line appends instead of padding.
pub fn splice_line(line: &str, start: usize, end: usize, replacement: &str) -> String {
    let before: String = line.chars().take(start).collect();
    let after: String = line.chars().skip(end.max(start)).collect();
    let mut out = String::with_capacity(before.len() + replacement.len() + after.len());
    out.push_str(&before);
    out.push_str(replacement);
    out.push_str(&after);
    out
}
