//! Linear (offset-range) selection and the `replace_selection` primitive.
//!
//! Copy, cut, paste, delete and typed insert are all expressed through
//! [`replace_selection`]; the update layer only decides what to replace.

use serde::Serialize;
use std::ops::Range;

use super::buffer::Document;

/// A range of character offsets. `start` and `end` may be in either order;
/// `start == end` is a caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width selection
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn min(&self) -> usize {
        self.start.min(self.end)
    }

    pub fn max(&self) -> usize {
        self.start.max(self.end)
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Normalized range `min..max`
    pub fn range(&self) -> Range<usize> {
        self.min()..self.max()
    }

    pub fn len(&self) -> usize {
        self.max() - self.min()
    }

    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Clamp both ends to `[0, len]`
    pub fn clamped(&self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Text covered by the selection (empty for a caret)
pub fn selected_text(doc: &Document, sel: Selection) -> String {
    doc.slice(sel.range())
}

/// `doc[..min] + replacement + doc[max..]`, selecting the inserted text
pub fn replace_selection(doc: &Document, sel: Selection, replacement: &str) -> (Document, Selection) {
    let sel = sel.clamped(doc.len_chars());
    let start = sel.min();
    let new_doc = doc.replace(sel.range(), replacement);
    let inserted = replacement.chars().count();
    (new_doc, Selection::new(start, start + inserted))
}

/// Select the whole document
pub fn select_all(doc: &Document) -> Selection {
    Selection::new(0, doc.len_chars())
}
