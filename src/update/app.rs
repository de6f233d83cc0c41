//! App update functions: mode toggle, file I/O and dictionary loading

use std::path::PathBuf;

use crate::case::CaseError;
use crate::commands::Cmd;
use crate::messages::{AppMsg, ColumnMsg};
use crate::model::{AppModel, DictionaryState, DocumentOrigin, EditMode};

use super::column::{exit as exit_column_mode, update_column};

/// Handle app messages (mode toggle, file operations, async results)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::ToggleColumnMode => match model.mode {
            EditMode::Column(editor) => exit_column_mode(model, editor),
            EditMode::Linear(_) => update_column(model, ColumnMsg::Enter(None)),
        },

        AppMsg::NewDocument => {
            let initial = match &model.file.origin {
                DocumentOrigin::Internal { initial_text } => initial_text.clone(),
                DocumentOrigin::File => {
                    model.file.path = None;
                    String::new()
                }
            };
            model.load_document(&initial);
            model.ui.set_status("New file");
            Some(Cmd::Redraw)
        }

        AppMsg::SetContent(text) => {
            model.load_document(&text);
            Some(Cmd::Redraw)
        }

        AppMsg::LoadFile(path) => {
            model.ui.is_loading = true;
            model.ui.set_status("Loading...");
            Some(Cmd::LoadFile { path })
        }

        AppMsg::FileLoaded { path, result } => {
            model.ui.is_loading = false;
            match result {
                Ok(content) => {
                    model.load_document(&content);
                    model.ui.set_status(format!("Loaded: {}", path.display()));
                    model.file.path = Some(path);
                    model.file.origin = DocumentOrigin::File;
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", path.display(), e);
                    model
                        .ui
                        .set_status(format!("Error loading {}: {}", path.display(), e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFile => {
            if let DocumentOrigin::Internal { .. } = model.file.origin {
                model.file.is_dirty = false;
                model.ui.set_status("Saved");
                return Some(Cmd::PublishContent(model.text()));
            }
            match model.file.path.clone() {
                Some(path) => save_to(model, path),
                None => {
                    model.ui.set_status("No file path - use Save As");
                    Some(Cmd::Redraw)
                }
            }
        }

        AppMsg::SaveFileAs(path) => {
            model.file.path = Some(path.clone());
            model.file.origin = DocumentOrigin::File;
            save_to(model, path)
        }

        AppMsg::SaveCompleted { path, result } => {
            model.ui.is_saving = false;
            match result {
                Ok(()) => {
                    model.file.is_dirty = false;
                    model.ui.set_status(format!("Saved: {}", path.display()));
                }
                Err(e) => {
                    tracing::warn!("Failed to save {}: {}", path.display(), e);
                    model.ui.set_status(format!("Error: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::LoadDictionary(path) => {
            model.dictionary = DictionaryState::Loading;
            model.ui.set_status("Loading dictionary...");
            Some(Cmd::LoadDictionary { path })
        }

        AppMsg::DictionaryLoaded(result) => {
            match result {
                Ok(dict) => {
                    model
                        .ui
                        .set_status(format!("Dictionary loaded ({} words)", dict.len()));
                    model.dictionary = DictionaryState::Ready(dict);
                    if matches!(model.last_error, Some(CaseError::DictionaryRequired(_))) {
                        model.last_error = None;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary: {}", e);
                    model.ui.set_status(format!("Dictionary unavailable: {}", e));
                    model.dictionary = DictionaryState::Failed(e);
                }
            }
            Some(Cmd::Redraw)
        }
    }
}

fn save_to(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    let content = model.text();
    model.ui.is_saving = true;
    model.ui.set_status("Saving...");
    Some(Cmd::SaveFile { path, content })
}
