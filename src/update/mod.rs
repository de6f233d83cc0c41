//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod column;
mod document;
mod search;

use crate::commands::Cmd;
use crate::messages::{ColumnMsg, DocumentMsg, InputMsg, Msg};
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use column::update_column;
pub use document::update_document;
pub use search::update_search;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Input(m) => route_input(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::Column(m) => column::update_column(model, m),
        Msg::Search(m) => search::update_search(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Send raw input to whichever editor the mode flag selects
fn route_input(model: &mut AppModel, input: InputMsg) -> Option<Cmd> {
    if input == InputMsg::PasteFromClipboard {
        return Some(Cmd::ReadClipboard);
    }

    if model.is_column_mode() {
        map_input_to_column(input).and_then(|m| column::update_column(model, m))
    } else {
        map_input_to_document(input).and_then(|m| document::update_document(model, m))
    }
}

/// Map raw input to linear editor messages
///
/// Escape has no meaning outside column mode.
fn map_input_to_document(input: InputMsg) -> Option<DocumentMsg> {
    match input {
        InputMsg::Type(text) => Some(DocumentMsg::InsertText(text)),
        InputMsg::Backspace => Some(DocumentMsg::DeleteBackward),
        InputMsg::Delete => Some(DocumentMsg::DeleteForward),
        InputMsg::Copy => Some(DocumentMsg::Copy),
        InputMsg::Cut => Some(DocumentMsg::Cut),
        InputMsg::Paste(text) => Some(DocumentMsg::Paste(text)),
        InputMsg::Click(pos) => Some(DocumentMsg::ClickAt(pos)),
        InputMsg::Escape | InputMsg::PasteFromClipboard => None,
    }
}

/// Map raw input to column editor messages
fn map_input_to_column(input: InputMsg) -> Option<ColumnMsg> {
    match input {
        InputMsg::Type(text) => Some(ColumnMsg::InsertText(text)),
        InputMsg::Backspace => Some(ColumnMsg::Backspace),
        InputMsg::Delete => Some(ColumnMsg::Delete),
        InputMsg::Copy => Some(ColumnMsg::Copy),
        InputMsg::Cut => Some(ColumnMsg::Cut),
        InputMsg::Paste(text) => Some(ColumnMsg::Paste(text)),
        InputMsg::Escape => Some(ColumnMsg::Exit),
        InputMsg::Click(pos) => Some(ColumnMsg::Click(pos)),
        InputMsg::PasteFromClipboard => None,
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after selection state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SelectionSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = SelectionSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "selection", %diff, "state changed");
    }

    debug_assert!(
        model.history.cursor() < model.history.len(),
        "history cursor out of range after {msg_name}"
    );

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Input::Type("x")`
/// - `Column::Extend(Down)`
/// - `App::ToggleColumnMode`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Input(m) => format!("Input::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Column(m) => format!("Column::{:?}", m),
        Msg::Search(m) => format!("Search::{:?}", m),
        Msg::App(m) => match m {
            // Don't dump whole documents or dictionaries into the log
            crate::messages::AppMsg::SetContent(text) => {
                format!("App::SetContent({} chars)", text.chars().count())
            }
            crate::messages::AppMsg::FileLoaded { path, .. } => {
                format!("App::FileLoaded({})", path.display())
            }
            crate::messages::AppMsg::DictionaryLoaded(result) => {
                format!("App::DictionaryLoaded(ok={})", result.is_ok())
            }
            other => format!("App::{:?}", other),
        },
    }
}
