//! Linear editor update functions: editing, clipboard, caret and undo/redo

use crate::case::convert_case;
use crate::commands::Cmd;
use crate::editable::{replace_selection, select_all, selected_text, Document, Position, Selection};
use crate::messages::{Direction, DocumentMsg};
use crate::model::{AppModel, EditMode};

/// Handle linear editor messages
///
/// Undo and redo work in either mode; everything else needs linear mode.
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::Undo => return undo(model),
        DocumentMsg::Redo => return redo(model),
        _ => {}
    }

    let EditMode::Linear(sel) = model.mode else {
        tracing::debug!(?msg, "ignoring linear edit in column mode");
        return None;
    };
    let sel = sel.clamped(model.document().len_chars());

    match msg {
        DocumentMsg::InsertText(text) | DocumentMsg::Paste(text) => {
            if text.is_empty() {
                return None;
            }
            let (doc, inserted) = replace_selection(model.document(), sel, &text);
            apply_edit(model, doc, Selection::caret(inserted.max()))
        }

        DocumentMsg::DeleteBackward => {
            let range = if sel.is_caret() {
                let caret = sel.start;
                if caret == 0 {
                    return None;
                }
                Selection::new(caret - 1, caret)
            } else {
                sel
            };
            delete_range(model, range)
        }

        DocumentMsg::DeleteForward => {
            let range = if sel.is_caret() {
                let caret = sel.start;
                if caret >= model.document().len_chars() {
                    return None;
                }
                Selection::new(caret, caret + 1)
            } else {
                sel
            };
            delete_range(model, range)
        }

        DocumentMsg::DeleteSelection => {
            if sel.is_caret() {
                return None;
            }
            delete_range(model, sel)
        }

        DocumentMsg::Clear => {
            if model.document().is_empty() {
                return None;
            }
            apply_edit(model, Document::new(), Selection::caret(0))
        }

        DocumentMsg::ConvertCase(style) => {
            if sel.is_caret() {
                return None;
            }
            let original = selected_text(model.document(), sel);
            match convert_case(&original, style, model.dictionary()) {
                Ok(converted) => {
                    model.last_error = None;
                    let (doc, converted_sel) = replace_selection(model.document(), sel, &converted);
                    model.ui.set_status(format!("Converted to {}", style));
                    apply_edit(model, doc, converted_sel)
                }
                Err(e) => {
                    tracing::warn!("Case conversion failed: {}", e);
                    model.ui.set_status(format!("Error: {}", e));
                    model.last_error = Some(e);
                    Some(Cmd::Redraw)
                }
            }
        }

        DocumentMsg::Copy => {
            if sel.is_caret() {
                return None;
            }
            Some(Cmd::WriteClipboard(selected_text(model.document(), sel)))
        }

        DocumentMsg::Cut => {
            if sel.is_caret() {
                return None;
            }
            let text = selected_text(model.document(), sel);
            delete_range(model, sel);
            Some(Cmd::WriteClipboard(text).with_redraw())
        }

        DocumentMsg::SelectAll => set_selection(model, select_all(model.document())),

        DocumentMsg::SetSelection(new_sel) => {
            let clamped = new_sel.clamped(model.document().len_chars());
            set_selection(model, clamped)
        }

        DocumentMsg::ClickAt(pos) => {
            let offset = model.document().position_to_offset(pos);
            set_selection(model, Selection::caret(offset))
        }

        DocumentMsg::MoveCaret(direction) => {
            let target = move_caret(model.document(), sel, direction);
            set_selection(model, Selection::caret(target))
        }

        DocumentMsg::Undo | DocumentMsg::Redo => None,
    }
}

/// Commit an edited document and select `selection` in it
fn apply_edit(model: &mut AppModel, doc: Document, selection: Selection) -> Option<Cmd> {
    model.commit(doc);
    model.mode = EditMode::Linear(selection);
    Some(Cmd::Redraw)
}

fn delete_range(model: &mut AppModel, range: Selection) -> Option<Cmd> {
    let (doc, remaining) = replace_selection(model.document(), range, "");
    apply_edit(model, doc, remaining)
}

/// Selection-only change; never touches the history
fn set_selection(model: &mut AppModel, selection: Selection) -> Option<Cmd> {
    if model.selection() == Some(selection) {
        return None;
    }
    model.mode = EditMode::Linear(selection);
    Some(Cmd::Redraw)
}

/// Caret target for a movement key.
///
/// Left/Right on a range collapse to its edge; Up/Down keep the column,
/// clamped to the target line.
fn move_caret(doc: &Document, sel: Selection, direction: Direction) -> usize {
    match direction {
        Direction::Left if !sel.is_caret() => sel.min(),
        Direction::Right if !sel.is_caret() => sel.max(),
        Direction::Left => sel.end.saturating_sub(1),
        Direction::Right => (sel.end + 1).min(doc.len_chars()),
        Direction::Up | Direction::Down => {
            let pos = doc.offset_to_position(sel.end);
            let line = match direction {
                Direction::Up if pos.line == 0 => return sel.end,
                Direction::Up => pos.line - 1,
                _ if pos.line >= doc.last_line() => return sel.end,
                _ => pos.line + 1,
            };
            doc.position_to_offset(Position::new(line, pos.column))
        }
    }
}

fn undo(model: &mut AppModel) -> Option<Cmd> {
    if model.history.undo().is_none() {
        model.ui.set_status("Nothing to undo");
        return None;
    }
    model.file.is_dirty = true;
    model.clamp_selection();
    model.ui.set_status("Undo");
    Some(Cmd::Redraw)
}

fn redo(model: &mut AppModel) -> Option<Cmd> {
    if model.history.redo().is_none() {
        model.ui.set_status("Nothing to redo");
        return None;
    }
    model.file.is_dirty = true;
    model.clamp_selection();
    model.ui.set_status("Redo");
    Some(Cmd::Redraw)
}
