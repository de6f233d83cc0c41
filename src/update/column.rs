//! Column (rectangular selection) update functions

use crate::commands::Cmd;
use crate::editable::column::{self as block, ColumnEditor, ColumnSelection};
use crate::editable::{pad_and_recompute, Document, Position};
use crate::messages::ColumnMsg;
use crate::model::{AppModel, EditMode};

/// Handle column editor messages
///
/// `Enter` works from linear mode; every other message needs column mode.
/// Editing messages need an active rectangle: after a click cancels it, only
/// `Extend` (which starts a new one at the cursor) and `Exit` do anything.
pub fn update_column(model: &mut AppModel, msg: ColumnMsg) -> Option<Cmd> {
    if let ColumnMsg::Enter(pos) = msg {
        return enter(model, pos);
    }

    let EditMode::Column(mut editor) = model.mode else {
        tracing::debug!(?msg, "ignoring column message in linear mode");
        return None;
    };

    match msg {
        ColumnMsg::Enter(_) => None,

        ColumnMsg::Extend(direction) => {
            let rect = editor.ensure_rectangle();
            let doc = model.document();
            let extended = rect.extended(direction, doc.last_line(), model.config.page_lines);
            let (rect, padded) = pad_and_recompute(extended, doc);
            if model.commit(padded) {
                tracing::debug!(target: "selection", "padded lines up to column {}", rect.max_col());
            }
            editor.set_rectangle(rect);
            model.mode = EditMode::Column(editor);
            Some(Cmd::Redraw)
        }

        ColumnMsg::InsertText(text) => {
            let rect = editor.rectangle?;
            if text.is_empty() {
                return None;
            }
            if text.contains('\n') {
                // Multi-line input lands row by row, like a paste
                let (doc, rect) = block::paste(model.document(), rect, &text);
                return apply_block_edit(model, editor, doc, rect);
            }
            let (doc, rect) = block::insert_text(model.document(), rect, &text);
            apply_block_edit(model, editor, doc, rect)
        }

        ColumnMsg::Backspace => {
            let rect = editor.rectangle?;
            let (doc, rect) = block::backspace(model.document(), rect);
            apply_block_edit(model, editor, doc, rect)
        }

        ColumnMsg::Delete => {
            let rect = editor.rectangle?;
            let (doc, rect) = block::delete_forward(model.document(), rect);
            apply_block_edit(model, editor, doc, rect)
        }

        ColumnMsg::Copy => {
            let rect = editor.rectangle?;
            Some(Cmd::WriteClipboard(block::copy(model.document(), rect)))
        }

        ColumnMsg::Cut => {
            let rect = editor.rectangle?;
            let (payload, doc, rect) = block::cut(model.document(), rect);
            apply_block_edit(model, editor, doc, rect);
            Some(Cmd::WriteClipboard(payload).with_redraw())
        }

        ColumnMsg::Paste(payload) => {
            let rect = editor.rectangle?;
            if payload.is_empty() {
                return None;
            }
            let (doc, rect) = block::paste(model.document(), rect, &payload);
            apply_block_edit(model, editor, doc, rect)
        }

        ColumnMsg::Exit => exit(model, editor),

        ColumnMsg::Click(pos) => {
            editor.click(clamp_line(model.document(), pos));
            model.mode = EditMode::Column(editor);
            Some(Cmd::Redraw)
        }
    }
}

/// Switch to column mode with a degenerate rectangle.
///
/// Without an explicit position the rectangle starts where the linear
/// selection starts (or at the column cursor when already in column mode).
fn enter(model: &mut AppModel, pos: Option<Position>) -> Option<Cmd> {
    let pos = pos.unwrap_or_else(|| match model.mode {
        EditMode::Linear(sel) => model.document().offset_to_position(sel.min()),
        EditMode::Column(editor) => editor.cursor,
    });
    let pos = clamp_line(model.document(), pos);
    model.mode = EditMode::Column(ColumnEditor::enter(pos));
    model.ui.set_status("Column mode");
    Some(Cmd::Redraw)
}

/// Strip trailing whitespace, push once if that changed anything, and go
/// back to linear mode with a caret at the moving corner.
pub(super) fn exit(model: &mut AppModel, editor: ColumnEditor) -> Option<Cmd> {
    let (cleaned, caret) = block::exit(model.document(), editor.rectangle, editor.cursor);
    model.commit(cleaned);
    model.mode = EditMode::Linear(caret);
    model.ui.set_status("Linear mode");
    Some(Cmd::Redraw)
}

/// Keep the line inside the document; the column may stay past the line end
fn clamp_line(doc: &Document, pos: Position) -> Position {
    Position::new(pos.line.min(doc.last_line()), pos.column)
}

fn apply_block_edit(
    model: &mut AppModel,
    mut editor: ColumnEditor,
    doc: Document,
    rect: ColumnSelection,
) -> Option<Cmd> {
    model.commit(doc);
    editor.set_rectangle(rect);
    model.mode = EditMode::Column(editor);
    Some(Cmd::Redraw)
}
