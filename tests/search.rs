//! Find/replace tests through the update layer

mod common;

use common::{
    apply_all, buffer_to_string, selection, test_model, test_model_with_dictionary,
    test_model_with_selection,
};
use textpad::case::{CaseError, CaseStyle};
use textpad::config::EditorConfig;
use textpad::editable::Selection;
use textpad::messages::{Msg, SearchMsg};
use textpad::model::AppModel;
use textpad::update::update;

fn set_term(term: &str) -> Msg {
    Msg::Search(SearchMsg::SetTerm(term.to_string()))
}

fn set_replacement(replacement: &str) -> Msg {
    Msg::Search(SearchMsg::SetReplacement(replacement.to_string()))
}

// ========================================================================
// Find
// ========================================================================

#[test]
fn test_find_selects_first_match() {
    let mut model = test_model("one two one", 5);
    apply_all(&mut model, [set_term("one"), Msg::Search(SearchMsg::Find)]);

    assert_eq!(selection(&model), Selection::new(0, 3));
}

#[test]
fn test_find_next_wraps_around() {
    let mut model = test_model_with_selection("abXcd", 2, 3);
    apply_all(&mut model, [set_term("X"), Msg::Search(SearchMsg::FindNext)]);

    assert_eq!(selection(&model), Selection::new(2, 3));
}

#[test]
fn test_find_next_advances() {
    let mut model = test_model("aXbXc", 0);
    apply_all(
        &mut model,
        [
            set_term("X"),
            Msg::Search(SearchMsg::FindNext),
            Msg::Search(SearchMsg::FindNext),
        ],
    );

    assert_eq!(selection(&model), Selection::new(3, 4));
}

#[test]
fn test_find_previous_wraps_to_last() {
    let mut model = test_model_with_selection("aXbXc", 1, 2);
    apply_all(&mut model, [set_term("X"), Msg::Search(SearchMsg::FindPrevious)]);

    assert_eq!(selection(&model), Selection::new(3, 4));
}

#[test]
fn test_find_not_found_keeps_selection() {
    let mut model = test_model_with_selection("abc", 0, 1);
    apply_all(&mut model, [set_term("z"), Msg::Search(SearchMsg::Find)]);

    assert_eq!(selection(&model), Selection::new(0, 1));
    assert_eq!(model.ui.status_message, "\"z\" not found");
}

#[test]
fn test_empty_term_is_noop() {
    let mut model = test_model("abc", 1);
    assert!(update(&mut model, Msg::Search(SearchMsg::Find)).is_none());
    assert!(update(&mut model, Msg::Search(SearchMsg::ReplaceAll)).is_none());
    assert_eq!(buffer_to_string(&model), "abc");
}

#[test]
fn test_find_ignoring_case() {
    let mut model = test_model("Hello HELLO", 0);
    apply_all(
        &mut model,
        [
            set_term("hello"),
            Msg::Search(SearchMsg::SetCaseSensitive(false)),
            Msg::Search(SearchMsg::Find),
            Msg::Search(SearchMsg::FindNext),
        ],
    );

    assert_eq!(selection(&model), Selection::new(6, 11));
}

#[test]
fn test_case_sensitivity_from_config() {
    let config = EditorConfig {
        case_sensitive_search: false,
        ..EditorConfig::default()
    };
    let model = AppModel::new("", config);
    assert!(!model.search.case_sensitive);
}

// ========================================================================
// Replace
// ========================================================================

#[test]
fn test_replace_all_is_one_history_entry() {
    let mut model = test_model("aXbXc", 0);
    apply_all(
        &mut model,
        [
            set_term("X"),
            set_replacement("_"),
            Msg::Search(SearchMsg::ReplaceAll),
        ],
    );

    assert_eq!(buffer_to_string(&model), "a_b_c");
    assert_eq!(model.history.len(), 2);
    assert_eq!(model.ui.status_message, "Replaced 2 occurrence(s)");
}

#[test]
fn test_replace_all_without_matches_leaves_history() {
    let mut model = test_model("abc", 0);
    apply_all(
        &mut model,
        [
            set_term("X"),
            set_replacement("_"),
            Msg::Search(SearchMsg::ReplaceAll),
        ],
    );

    assert_eq!(model.history.len(), 1);
    assert_eq!(model.ui.status_message, "\"X\" not found");
}

#[test]
fn test_replace_steps_through_matches() {
    let mut model = test_model("aXbXc", 0);
    apply_all(
        &mut model,
        [
            set_term("X"),
            set_replacement("_"),
            Msg::Search(SearchMsg::Find),
            Msg::Search(SearchMsg::Replace),
        ],
    );
    assert_eq!(buffer_to_string(&model), "a_bXc");
    assert_eq!(selection(&model), Selection::new(3, 4));

    update(&mut model, Msg::Search(SearchMsg::Replace));
    assert_eq!(buffer_to_string(&model), "a_b_c");
    assert_eq!(selection(&model), Selection::new(3, 4));
    assert_eq!(model.history.len(), 3);
}

#[test]
fn test_replace_with_unrelated_selection_only_moves() {
    let mut model = test_model("aXbXc", 0);
    apply_all(
        &mut model,
        [
            set_term("X"),
            set_replacement("_"),
            Msg::Search(SearchMsg::Replace),
        ],
    );

    assert_eq!(buffer_to_string(&model), "aXbXc");
    assert_eq!(selection(&model), Selection::new(1, 2));
    assert_eq!(model.history.len(), 1);
}

#[test]
fn test_replace_with_empty_replacement_deletes() {
    let mut model = test_model("a--b", 0);
    apply_all(
        &mut model,
        [set_term("-"), Msg::Search(SearchMsg::ReplaceAll)],
    );

    assert_eq!(buffer_to_string(&model), "ab");
}

// ========================================================================
// Change case at match
// ========================================================================

#[test]
fn test_change_case_walks_matches() {
    let mut model = test_model_with_dictionary("myvariable = myvariable", 0, 0);
    apply_all(
        &mut model,
        [
            set_term("myvariable"),
            Msg::Search(SearchMsg::Find),
            Msg::Search(SearchMsg::ChangeCase(CaseStyle::SnakeCase)),
        ],
    );
    assert_eq!(buffer_to_string(&model), "my_variable = myvariable");
    assert_eq!(selection(&model), Selection::new(14, 24));

    update(&mut model, Msg::Search(SearchMsg::ChangeCase(CaseStyle::SnakeCase)));
    assert_eq!(buffer_to_string(&model), "my_variable = my_variable");
    assert_eq!(selection(&model), Selection::caret(25));
}

#[test]
fn test_change_case_without_dictionary_sets_error() {
    let mut model = test_model("myvariable", 0);
    apply_all(
        &mut model,
        [
            set_term("myvariable"),
            Msg::Search(SearchMsg::Find),
            Msg::Search(SearchMsg::ChangeCase(CaseStyle::PascalCase)),
        ],
    );

    assert_eq!(buffer_to_string(&model), "myvariable");
    assert_eq!(
        model.last_error,
        Some(CaseError::DictionaryRequired(CaseStyle::PascalCase))
    );
    assert_eq!(model.history.len(), 1);
}
