//! Linear undo/redo history of full document snapshots.
//!
//! Each entry is a complete [`Document`]; rope clones share structure, so
//! keeping every snapshot is cheap. The history never branches: pushing
//! after an undo discards the redo tail.

use super::buffer::Document;

/// Linear history of document snapshots.
///
/// `entries[cursor]` is always the displayed document, and
/// `0 <= cursor < entries.len()` holds after every operation.
#[derive(Debug, Clone)]
pub struct EditHistory {
    entries: Vec<Document>,
    cursor: usize,
    /// Maximum number of entries kept (`None` = unbounded)
    max_entries: Option<usize>,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

impl EditHistory {
    /// Create a history whose only entry is `initial`
    pub fn new(initial: Document) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            max_entries: None,
        }
    }

    /// Create a history that keeps at most `max_entries` snapshots.
    /// A limit below 1 is raised to 1.
    pub fn with_limit(initial: Document, max_entries: Option<usize>) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            max_entries: max_entries.map(|n| n.max(1)),
        }
    }

    /// Record a new document: truncate the redo tail, append, advance.
    pub fn push(&mut self, doc: Document) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(doc);
        self.cursor = self.entries.len() - 1;

        if let Some(max) = self.max_entries {
            while self.entries.len() > max {
                self.entries.remove(0);
                self.cursor -= 1;
            }
        }
    }

    /// Step back one entry and return it, or `None` at the oldest entry
    pub fn undo(&mut self) -> Option<&Document> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward one entry and return it, or `None` at the newest entry
    pub fn redo(&mut self) -> Option<&Document> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    /// Discard everything and start over from `doc`
    pub fn reset(&mut self, doc: Document) {
        self.entries.clear();
        self.entries.push(doc);
        self.cursor = 0;
    }

    /// The displayed document
    pub fn current(&self) -> &Document {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }
}
