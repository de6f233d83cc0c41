//! Rectangular ("column") block selection.
//!
//! A [`ColumnSelection`] is an anchor corner (`start_*`) and a moving corner
//! (`end_*`). Directional commands move only the moving corner. The covered
//! block is `[min_line, max_line] x [min_col, max_col)`, and columns may run
//! past the end of a line: short lines are padded with spaces whenever the
//! rectangle grows, so edits always land on a true rectangle.
//!
//! All edit functions are pure `(doc, rect) -> (doc', rect')` transforms.

use serde::Serialize;

use super::buffer::{
    char_substring, pad_line_to_column, splice_line, strip_trailing_whitespace, Document,
};
use super::position::Position;
use super::selection::Selection;

/// Lines moved by `PageUp` / `PageDown` unless configured otherwise
pub const DEFAULT_PAGE_LINES: usize = 10;

/// Direction of a rectangle extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtendDirection {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
}

/// Rectangle with an anchor corner and a moving corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnSelection {
    pub start_line: usize,
    pub end_line: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl ColumnSelection {
    pub const fn new(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        Self {
            start_line,
            end_line,
            start_col,
            end_col,
        }
    }

    /// Degenerate rectangle with both corners at `pos`
    pub const fn at(pos: Position) -> Self {
        Self::new(pos.line, pos.column, pos.line, pos.column)
    }

    pub fn min_line(&self) -> usize {
        self.start_line.min(self.end_line)
    }

    pub fn max_line(&self) -> usize {
        self.start_line.max(self.end_line)
    }

    pub fn min_col(&self) -> usize {
        self.start_col.min(self.end_col)
    }

    pub fn max_col(&self) -> usize {
        self.start_col.max(self.end_col)
    }

    /// True when the column span is empty (`min_col == max_col`)
    pub fn is_degenerate_span(&self) -> bool {
        self.start_col == self.end_col
    }

    pub fn anchor(&self) -> Position {
        Position::new(self.start_line, self.start_col)
    }

    /// The moving corner
    pub fn head(&self) -> Position {
        Position::new(self.end_line, self.end_col)
    }

    pub fn line_span(&self) -> usize {
        self.max_line() - self.min_line() + 1
    }

    /// Same line range, both columns at `col`
    pub fn collapsed_to(&self, col: usize) -> Self {
        Self::new(self.min_line(), col, self.max_line(), col)
    }

    /// Move the moving corner. Lines clamp to `[0, last_line]`,
    /// columns only clamp at 0.
    pub fn extended(&self, dir: ExtendDirection, last_line: usize, page_lines: usize) -> Self {
        let mut next = *self;
        match dir {
            ExtendDirection::Up => next.end_line = next.end_line.saturating_sub(1),
            ExtendDirection::Down => next.end_line = (next.end_line + 1).min(last_line),
            ExtendDirection::PageUp => next.end_line = next.end_line.saturating_sub(page_lines),
            ExtendDirection::PageDown => {
                next.end_line = next.end_line.saturating_add(page_lines).min(last_line)
            }
            ExtendDirection::Left => next.end_col = next.end_col.saturating_sub(1),
            ExtendDirection::Right => next.end_col = next.end_col.saturating_add(1),
        }
        next
    }
}

/// Column-mode editor state.
///
/// `rectangle == None` is the inactive state: the editor still owns a
/// cursor (set by a click) but no block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColumnEditor {
    pub rectangle: Option<ColumnSelection>,
    pub cursor: Position,
}

impl ColumnEditor {
    /// Active editor with a degenerate rectangle at `pos`
    pub fn enter(pos: Position) -> Self {
        Self {
            rectangle: Some(ColumnSelection::at(pos)),
            cursor: pos,
        }
    }

    pub fn is_active(&self) -> bool {
        self.rectangle.is_some()
    }

    /// Cancel the rectangle and park the cursor at `pos`
    pub fn click(&mut self, pos: Position) {
        self.rectangle = None;
        self.cursor = pos;
    }

    /// The active rectangle, starting a degenerate one at the cursor if inactive
    pub fn ensure_rectangle(&mut self) -> ColumnSelection {
        let rect = self
            .rectangle
            .unwrap_or_else(|| ColumnSelection::at(self.cursor));
        self.rectangle = Some(rect);
        rect
    }

    pub fn set_rectangle(&mut self, rect: ColumnSelection) {
        self.cursor = rect.head();
        self.rectangle = Some(rect);
    }
}

// =============================================================================
// Per-line helpers
// =============================================================================

/// Covered line indices, clamped to the document
fn covered_lines(doc: &Document, rect: &ColumnSelection) -> std::ops::RangeInclusive<usize> {
    let last = doc.last_line();
    rect.min_line().min(last)..=rect.max_line().min(last)
}

/// Rebuild `doc` with `f` applied to every covered line
fn map_covered_lines<F>(doc: &Document, rect: &ColumnSelection, mut f: F) -> Document
where
    F: FnMut(usize, &str) -> String,
{
    let mut lines = doc.lines();
    for idx in covered_lines(doc, rect) {
        if let Some(line) = lines.get_mut(idx) {
            *line = f(idx, line);
        }
    }
    let new_doc = Document::from_lines(&lines);
    if new_doc == *doc {
        doc.clone()
    } else {
        new_doc
    }
}

// =============================================================================
// Padding
// =============================================================================

/// Pad every covered line shorter than `max_col` with spaces up to `max_col`.
///
/// The rectangle comes back with its lines clamped to the document; the
/// document is unchanged (and equal) when no line needed padding.
pub fn pad_and_recompute(rect: ColumnSelection, doc: &Document) -> (ColumnSelection, Document) {
    let last = doc.last_line();
    let rect = ColumnSelection {
        start_line: rect.start_line.min(last),
        end_line: rect.end_line.min(last),
        ..rect
    };
    let max_col = rect.max_col();
    let padded = map_covered_lines(doc, &rect, |_, line| pad_line_to_column(line, max_col));
    (rect, padded)
}

// =============================================================================
// Edits
// =============================================================================

/// Replace `[min_col, max_col)` on every covered line with `text` and
/// collapse the rectangle to `min_col + len(text)`.
pub fn insert_text(doc: &Document, rect: ColumnSelection, text: &str) -> (Document, ColumnSelection) {
    let (min_col, max_col) = (rect.min_col(), rect.max_col());
    let new_doc = map_covered_lines(doc, &rect, |_, line| {
        let padded = pad_line_to_column(line, max_col);
        splice_line(&padded, min_col, max_col, text)
    });
    let new_rect = rect.collapsed_to(min_col + text.chars().count());
    (new_doc, new_rect)
}

/// Remove `[min_col, max_col)` from every covered line and collapse to `min_col`
pub fn delete_rectangle(doc: &Document, rect: ColumnSelection) -> (Document, ColumnSelection) {
    let (min_col, max_col) = (rect.min_col(), rect.max_col());
    let new_doc = map_covered_lines(doc, &rect, |_, line| splice_line(line, min_col, max_col, ""));
    (new_doc, rect.collapsed_to(min_col))
}

/// Backspace: delete the block, or with an empty span the character left of
/// it on every line (no-op at column 0).
pub fn backspace(doc: &Document, rect: ColumnSelection) -> (Document, ColumnSelection) {
    if !rect.is_degenerate_span() {
        return delete_rectangle(doc, rect);
    }
    let col = rect.min_col();
    if col == 0 {
        return (doc.clone(), rect);
    }
    let new_doc = map_covered_lines(doc, &rect, |_, line| splice_line(line, col - 1, col, ""));
    (new_doc, rect.collapsed_to(col - 1))
}

/// Forward delete: delete the block, or with an empty span the character at
/// `min_col` on every line. The rectangle does not move.
pub fn delete_forward(doc: &Document, rect: ColumnSelection) -> (Document, ColumnSelection) {
    if !rect.is_degenerate_span() {
        return delete_rectangle(doc, rect);
    }
    let col = rect.min_col();
    let new_doc = map_covered_lines(doc, &rect, |_, line| splice_line(line, col, col + 1, ""));
    (new_doc, rect)
}

/// Per-line `[min_col, max_col)` fragments joined with `\n`
pub fn copy(doc: &Document, rect: ColumnSelection) -> String {
    let (min_col, max_col) = (rect.min_col(), rect.max_col());
    covered_lines(doc, &rect)
        .map(|idx| {
            let line = doc.line(idx).unwrap_or_default();
            char_substring(&line, min_col, max_col)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Copy the block, then delete it. Returns the clipboard payload too.
pub fn cut(doc: &Document, rect: ColumnSelection) -> (String, Document, ColumnSelection) {
    let payload = copy(doc, rect);
    let (new_doc, new_rect) = delete_rectangle(doc, rect);
    (payload, new_doc, new_rect)
}

/// Paste `payload` into the block.
///
/// A single-line payload replaces `[min_col, max_col)` on every covered line.
/// A multi-line payload puts line `i` on covered line `min_line + i` while
/// both last; the rest of the payload is dropped. The rectangle is unchanged.
pub fn paste(doc: &Document, rect: ColumnSelection, payload: &str) -> (Document, ColumnSelection) {
    if payload.is_empty() {
        return (doc.clone(), rect);
    }
    let (min_line, min_col, max_col) = (rect.min_line(), rect.min_col(), rect.max_col());
    let parts: Vec<&str> = payload.split('\n').collect();

    let new_doc = map_covered_lines(doc, &rect, |idx, line| {
        let fragment = if parts.len() == 1 {
            Some(parts[0])
        } else {
            idx.checked_sub(min_line).and_then(|i| parts.get(i)).copied()
        };
        match fragment {
            Some(fragment) => {
                let padded = pad_line_to_column(line, min_col);
                splice_line(&padded, min_col, max_col, fragment)
            }
            None => line.to_string(),
        }
    });
    (new_doc, rect)
}

/// Leave column mode: strip trailing whitespace from every line and put a
/// caret at the moving corner (clamped to the cleaned document).
pub fn exit(doc: &Document, rect: Option<ColumnSelection>, cursor: Position) -> (Document, Selection) {
    let cleaned_text = strip_trailing_whitespace(&doc.text());
    let cleaned = if cleaned_text == doc.text() {
        doc.clone()
    } else {
        Document::from_text(&cleaned_text)
    };
    let head = rect.map(|r| r.head()).unwrap_or(cursor);
    let caret = cleaned.position_to_offset(head);
    (cleaned, Selection::caret(caret))
}
