//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;
use std::sync::Arc;

use crate::case::{CaseStyle, Dictionary};
use crate::editable::{ExtendDirection, Position, Selection};

/// Direction for caret movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Raw user input, routed to the active editor by the mode flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMsg {
    /// Typed text (usually a single character)
    Type(String),
    /// Backspace key
    Backspace,
    /// Forward delete key
    Delete,
    Copy,
    Cut,
    /// Paste the given text
    Paste(String),
    /// Paste whatever the clipboard holds (read asynchronously)
    PasteFromClipboard,
    /// Escape key
    Escape,
    /// Mouse click at a line/column
    Click(Position),
}

/// Linear-selection editing messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    // === Editing ===
    /// Replace the selection with text, caret after it
    InsertText(String),
    /// Delete the selection, or the character before the caret
    DeleteBackward,
    /// Delete the selection, or the character after the caret
    DeleteForward,
    /// Delete the selection (no-op for a caret)
    DeleteSelection,
    /// Remove all text
    Clear,
    /// Convert the selected text to a case style, keeping it selected
    ConvertCase(CaseStyle),

    // === Clipboard ===
    Copy,
    Cut,
    Paste(String),

    // === Selection ===
    SelectAll,
    SetSelection(Selection),
    MoveCaret(Direction),
    /// Place the caret at a line/column
    ClickAt(Position),

    // === History ===
    Undo,
    Redo,
}

/// Column (rectangular) selection messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnMsg {
    /// Enter column mode at a position, or at the linear selection start
    Enter(Option<Position>),
    /// Move the moving corner of the rectangle
    Extend(ExtendDirection),
    InsertText(String),
    Backspace,
    Delete,
    Copy,
    Cut,
    Paste(String),
    /// Leave column mode, stripping trailing whitespace
    Exit,
    /// Cancel the rectangle and park the cursor
    Click(Position),
}

/// Find/replace messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMsg {
    SetTerm(String),
    SetReplacement(String),
    SetCaseSensitive(bool),
    /// Select the first match in the document
    Find,
    FindNext,
    FindPrevious,
    Replace,
    ReplaceAll,
    /// Convert the selected match to a case style, then move to the next one
    ChangeCase(CaseStyle),
}

/// App messages (mode, files, dictionary, async results)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Switch between linear and column mode
    ToggleColumnMode,
    /// Start over (empty, or the initial text of an internal document)
    NewDocument,
    /// Replace the whole document, resetting history
    SetContent(String),
    /// Load a file
    LoadFile(PathBuf),
    /// File load completed (async result)
    FileLoaded {
        path: PathBuf,
        result: Result<String, String>,
    },
    /// Save to the current path
    SaveFile,
    /// Save to a new path
    SaveFileAs(PathBuf),
    /// File save completed (async result)
    SaveCompleted {
        path: PathBuf,
        result: Result<(), String>,
    },
    /// Load a word list for case conversion
    LoadDictionary(PathBuf),
    /// Dictionary load completed (async result)
    DictionaryLoaded(Result<Arc<Dictionary>, String>),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Raw input for whichever editor is active
    Input(InputMsg),
    /// Linear editor messages
    Document(DocumentMsg),
    /// Column editor messages
    Column(ColumnMsg),
    /// Find/replace messages
    Search(SearchMsg),
    /// App messages (mode, file I/O, dictionary)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a typed-text input message
    pub fn type_text(text: impl Into<String>) -> Self {
        Msg::Input(InputMsg::Type(text.into()))
    }

    /// Create a caret movement message
    pub fn move_caret(direction: Direction) -> Self {
        Msg::Document(DocumentMsg::MoveCaret(direction))
    }

    /// Create a selection message
    pub fn select(start: usize, end: usize) -> Self {
        Msg::Document(DocumentMsg::SetSelection(Selection::new(start, end)))
    }

    /// Create a rectangle extension message
    pub fn extend(direction: ExtendDirection) -> Self {
        Msg::Column(ColumnMsg::Extend(direction))
    }
}

impl From<InputMsg> for Msg {
    fn from(msg: InputMsg) -> Self {
        Msg::Input(msg)
    }
}

impl From<DocumentMsg> for Msg {
    fn from(msg: DocumentMsg) -> Self {
        Msg::Document(msg)
    }
}

impl From<ColumnMsg> for Msg {
    fn from(msg: ColumnMsg) -> Self {
        Msg::Column(msg)
    }
}

impl From<SearchMsg> for Msg {
    fn from(msg: SearchMsg) -> Self {
        Msg::Search(msg)
    }
}

impl From<AppMsg> for Msg {
    fn from(msg: AppMsg) -> Self {
        Msg::App(msg)
    }
}
