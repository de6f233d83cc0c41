//! Find/replace update functions

use crate::commands::Cmd;
use crate::editable::{Document, Selection};
use crate::messages::SearchMsg;
use crate::model::{AppModel, EditMode};
use crate::search::{self, SearchEdit};

/// Handle find/replace messages
///
/// Term and option changes work in any mode; the operations act on the
/// linear selection and are ignored in column mode. An empty term makes
/// every operation a no-op.
pub fn update_search(model: &mut AppModel, msg: SearchMsg) -> Option<Cmd> {
    match msg {
        SearchMsg::SetTerm(term) => {
            model.search.term = term;
            return None;
        }
        SearchMsg::SetReplacement(replacement) => {
            model.search.replacement = replacement;
            return None;
        }
        SearchMsg::SetCaseSensitive(case_sensitive) => {
            model.search.case_sensitive = case_sensitive;
            return None;
        }
        _ => {}
    }

    let EditMode::Linear(sel) = model.mode else {
        model.ui.set_status("Search is not available in column mode");
        return Some(Cmd::Redraw);
    };
    if model.search.term.is_empty() {
        return None;
    }

    let term = model.search.term.clone();
    let opts = model.search.options();
    let sel = sel.clamped(model.document().len_chars());

    match msg {
        SearchMsg::Find => {
            let found = search::find_first(model.document(), &term, opts);
            select_match(model, found)
        }

        SearchMsg::FindNext => {
            let found = search::find_next(&model.text(), sel.max(), &term, opts);
            select_match(model, found.map(Selection::from))
        }

        SearchMsg::FindPrevious => {
            let found = search::find_previous(&model.text(), sel.min(), &term, opts);
            select_match(model, found.map(Selection::from))
        }

        SearchMsg::Replace => {
            let replacement = model.search.replacement.clone();
            let edit = search::replace(model.document(), sel, &term, &replacement, opts);
            apply_search_edit(model, edit)
        }

        SearchMsg::ReplaceAll => {
            let text = model.text();
            let count = search::find_all(&text, &term, opts).len();
            if count == 0 {
                return not_found(model);
            }
            let replaced = search::replace_all(&text, &term, &model.search.replacement, opts);
            model.commit(Document::from_text(&replaced));
            model.clamp_selection();
            model.ui.set_status(format!("Replaced {} occurrence(s)", count));
            Some(Cmd::Redraw)
        }

        SearchMsg::ChangeCase(style) => {
            let result = search::change_case_at_match(
                model.document(),
                sel,
                &term,
                style,
                model.dictionary(),
                opts,
            );
            match result {
                Ok(edit) => {
                    model.last_error = None;
                    apply_search_edit(model, edit)
                }
                Err(e) => {
                    tracing::warn!("Change case failed: {}", e);
                    model.ui.set_status(format!("Error: {}", e));
                    model.last_error = Some(e);
                    Some(Cmd::Redraw)
                }
            }
        }

        SearchMsg::SetTerm(_) | SearchMsg::SetReplacement(_) | SearchMsg::SetCaseSensitive(_) => {
            None
        }
    }
}

fn not_found(model: &mut AppModel) -> Option<Cmd> {
    model
        .ui
        .set_status(format!("\"{}\" not found", model.search.term));
    Some(Cmd::Redraw)
}

/// Select a match, or report that there is none (selection unchanged)
fn select_match(model: &mut AppModel, found: Option<Selection>) -> Option<Cmd> {
    match found {
        Some(selection) => {
            model.mode = EditMode::Linear(selection);
            model.ui.set_status(format!("Found at {}", selection.min()));
            Some(Cmd::Redraw)
        }
        None => not_found(model),
    }
}

fn apply_search_edit(model: &mut AppModel, edit: Option<SearchEdit>) -> Option<Cmd> {
    let Some(edit) = edit else {
        return not_found(model);
    };
    if let Some(doc) = edit.document {
        model.commit(doc);
    }
    model.mode = EditMode::Linear(edit.selection);
    Some(Cmd::Redraw)
}
