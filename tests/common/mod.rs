//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Arc;

use textpad::case::Dictionary;
use textpad::config::EditorConfig;
use textpad::editable::{ColumnEditor, Position, Selection};
use textpad::messages::Msg;
use textpad::model::{AppModel, DictionaryState, EditMode};
use textpad::runtime::{MemoryClipboard, Session};
use textpad::update::update;

/// Create a test model with the caret at `offset`
pub fn test_model(text: &str, offset: usize) -> AppModel {
    test_model_with_selection(text, offset, offset)
}

/// Create a test model with a selection from `start` to `end`
pub fn test_model_with_selection(text: &str, start: usize, end: usize) -> AppModel {
    let mut model = AppModel::new(text, EditorConfig::default());
    model.mode = EditMode::Linear(Selection::new(start, end));
    model
}

/// Create a test model in column mode with a degenerate rectangle at `line`/`column`
pub fn column_model(text: &str, line: usize, column: usize) -> AppModel {
    let mut model = AppModel::new(text, EditorConfig::default());
    model.mode = EditMode::Column(ColumnEditor::enter(Position::new(line, column)));
    model
}

/// Words used by the case conversion tests
pub fn test_dictionary() -> Arc<Dictionary> {
    Arc::new(Dictionary::parse(
        "booking\npassengers\nmy\nvariable\nname\nhello\nworld\n",
    ))
}

/// Create a test model with the test dictionary already loaded
pub fn test_model_with_dictionary(text: &str, start: usize, end: usize) -> AppModel {
    let mut model = test_model_with_selection(text, start, end);
    model.dictionary = DictionaryState::Ready(test_dictionary());
    model
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.text()
}

/// Current linear selection; panics in column mode
pub fn selection(model: &AppModel) -> Selection {
    model.selection().expect("expected linear mode")
}

/// Apply a sequence of messages, ignoring the returned commands
pub fn apply_all(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) {
    for msg in msgs {
        update(model, msg);
    }
}

/// Session over `model` with an empty in-memory clipboard
pub fn test_session(model: AppModel) -> Session {
    Session::new(model, Box::new(MemoryClipboard::new()))
}
