//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.
//! The displayed document is always the current history entry, so every
//! content change goes through [`AppModel::commit`].

pub mod ui;

pub use ui::UiState;

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::case::{CaseError, Dictionary};
use crate::config::EditorConfig;
use crate::editable::{ColumnEditor, ColumnSelection, Document, EditHistory, Position, Selection};
use crate::search::SearchState;

/// Which editor receives raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Offset-range selection
    Linear(Selection),
    /// Rectangular selection
    Column(ColumnEditor),
}

impl Default for EditMode {
    fn default() -> Self {
        EditMode::Linear(Selection::caret(0))
    }
}

/// Progress of the word list used for case conversion
#[derive(Debug, Clone, Default)]
pub enum DictionaryState {
    #[default]
    NotLoaded,
    Loading,
    Ready(Arc<Dictionary>),
    Failed(String),
}

impl DictionaryState {
    pub fn get(&self) -> Option<&Dictionary> {
        match self {
            DictionaryState::Ready(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DictionaryState::Loading)
    }
}

/// Where the document came from, which decides what New and Save do
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// A plain file (or a fresh untitled buffer)
    #[default]
    File,
    /// Text handed over by an embedding host; Save publishes it back and
    /// New restores `initial_text`
    Internal { initial_text: String },
}

/// File bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileState {
    pub path: Option<PathBuf>,
    pub origin: DocumentOrigin,
    /// Content changed since the last load/save
    pub is_dirty: bool,
}

impl FileState {
    /// Display name for the status line
    pub fn display_name(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string())
    }
}

/// Plain snapshot handed to a renderer after each update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderState {
    pub text: String,
    pub mode: RenderMode,
    /// Linear selection (linear mode only)
    pub selection: Option<Selection>,
    /// Rectangle (column mode with an active block only)
    pub rectangle: Option<ColumnSelection>,
    /// Column cursor (column mode only)
    pub column_cursor: Option<Position>,
    pub is_dirty: bool,
    pub path: Option<PathBuf>,
    pub status: String,
    pub can_undo: bool,
    pub can_redo: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Linear,
    Column,
}

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Undo history; the current entry is the displayed document
    pub history: EditHistory,
    /// Active editor and its selection
    pub mode: EditMode,
    /// Find/replace state
    pub search: SearchState,
    /// Word list for case conversion
    pub dictionary: DictionaryState,
    /// Path, origin and dirty flag
    pub file: FileState,
    /// Status line and busy flags
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Last case conversion failure, cleared by the next success
    pub last_error: Option<CaseError>,
}

impl AppModel {
    /// Create a model for an untitled document
    pub fn new(text: &str, config: EditorConfig) -> Self {
        let search = SearchState {
            case_sensitive: config.case_sensitive_search,
            ..SearchState::default()
        };
        Self {
            history: EditHistory::with_limit(Document::from_text(text), config.history_limit),
            mode: EditMode::default(),
            search,
            dictionary: DictionaryState::NotLoaded,
            file: FileState::default(),
            ui: UiState::with_status("New file"),
            config,
            last_error: None,
        }
    }

    /// Create a model for text read from `path`
    pub fn with_file(path: PathBuf, text: &str, config: EditorConfig) -> Self {
        let mut model = Self::new(text, config);
        model.ui.set_status(format!("Loaded: {}", path.display()));
        model.file.path = Some(path);
        model
    }

    /// Create a model for text owned by an embedding host
    pub fn internal(initial_text: &str, config: EditorConfig) -> Self {
        let mut model = Self::new(initial_text, config);
        model.file.origin = DocumentOrigin::Internal {
            initial_text: initial_text.to_string(),
        };
        model
    }

    /// The displayed document
    pub fn document(&self) -> &Document {
        self.history.current()
    }

    pub fn text(&self) -> String {
        self.document().text()
    }

    /// Linear selection, or `None` in column mode
    pub fn selection(&self) -> Option<Selection> {
        match self.mode {
            EditMode::Linear(sel) => Some(sel),
            EditMode::Column(_) => None,
        }
    }

    /// Column editor, or `None` in linear mode
    pub fn column_editor(&self) -> Option<&ColumnEditor> {
        match &self.mode {
            EditMode::Column(editor) => Some(editor),
            EditMode::Linear(_) => None,
        }
    }

    pub fn is_column_mode(&self) -> bool {
        matches!(self.mode, EditMode::Column(_))
    }

    /// Loaded dictionary, if any
    pub fn dictionary(&self) -> Option<&Dictionary> {
        self.dictionary.get()
    }

    /// Install a new document: push it if the content changed.
    ///
    /// Returns whether anything was pushed. This is the only place the
    /// history grows, which keeps one push per content change.
    pub fn commit(&mut self, doc: Document) -> bool {
        if &doc == self.document() {
            return false;
        }
        self.history.push(doc);
        self.file.is_dirty = true;
        true
    }

    /// Replace the document wholesale: reset history, back to a caret at 0
    pub fn load_document(&mut self, text: &str) {
        self.history.reset(Document::from_text(text));
        self.mode = EditMode::default();
        self.file.is_dirty = false;
        self.last_error = None;
    }

    /// Clamp the linear selection (or column cursor) after the document
    /// changed underneath it, e.g. on undo.
    pub fn clamp_selection(&mut self) {
        let len = self.document().len_chars();
        let last_line = self.document().last_line();
        match &mut self.mode {
            EditMode::Linear(sel) => *sel = sel.clamped(len),
            EditMode::Column(editor) => {
                editor.cursor.line = editor.cursor.line.min(last_line);
                if let Some(rect) = editor.rectangle.as_mut() {
                    rect.start_line = rect.start_line.min(last_line);
                    rect.end_line = rect.end_line.min(last_line);
                }
            }
        }
    }

    /// Snapshot for rendering
    pub fn render_state(&self) -> RenderState {
        let (mode, selection, rectangle, column_cursor) = match &self.mode {
            EditMode::Linear(sel) => (RenderMode::Linear, Some(*sel), None, None),
            EditMode::Column(editor) => (
                RenderMode::Column,
                None,
                editor.rectangle,
                Some(editor.cursor),
            ),
        };
        RenderState {
            text: self.text(),
            mode,
            selection,
            rectangle,
            column_cursor,
            is_dirty: self.file.is_dirty,
            path: self.file.path.clone(),
            status: self.ui.status_message.clone(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new("", EditorConfig::default())
    }
}
