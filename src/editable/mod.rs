//! Text editing core: the document value, linear undo history and the two
//! selection editors.
//!
//! # Architecture
//!
//! - [`Document`]: the authoritative text, replaced wholesale by every edit
//! - [`EditHistory`]: linear stack of document snapshots
//! - [`Selection`] + [`replace_selection`]: offset-range editing
//! - [`ColumnSelection`] / [`ColumnEditor`]: rectangular block editing
//!
//! Everything here is synchronous and free of side effects; the update layer
//! decides when a result is pushed onto the history.
//!
//! # Example
//!
//! ```
//! use textpad::editable::{replace_selection, Document, EditHistory, Selection};
//!
//! let doc = Document::from_text("hello world");
//! let mut history = EditHistory::new(doc.clone());
//!
//! let (doc, sel) = replace_selection(&doc, Selection::new(6, 11), "there");
//! history.push(doc.clone());
//!
//! assert_eq!(doc.text(), "hello there");
//! assert_eq!(sel, Selection::new(6, 11));
//! assert_eq!(history.undo().map(|d| d.text()).as_deref(), Some("hello world"));
//! ```

mod buffer;
pub mod column;
mod history;
mod position;
mod selection;

pub use buffer::{
    char_substring, pad_line_to_column, splice_line, strip_trailing_whitespace, Document,
};
pub use column::{pad_and_recompute, ColumnEditor, ColumnSelection, ExtendDirection};
pub use history::EditHistory;
pub use position::Position;
pub use selection::{replace_selection, select_all, selected_text, Selection};
