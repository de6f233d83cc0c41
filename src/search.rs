//! Literal substring search and replace over character offsets.
//!
//! Matching is plain and literal (no regex, no whole-word). Case-sensitive
//! by default; [`SearchOptions::case_sensitive`] = `false` folds each
//! character to lowercase before comparing. Forward and backward search wrap
//! around the document.

use std::ops::Range;

use crate::case::{convert_case, CaseError, CaseStyle, Dictionary};
use crate::editable::{replace_selection, selected_text, Document, Selection};

/// Options that change how a term matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// Find/replace panel state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub term: String,
    pub replacement: String,
    pub case_sensitive: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            term: String::new(),
            replacement: String::new(),
            case_sensitive: true,
        }
    }
}

impl SearchState {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            case_sensitive: self.case_sensitive,
        }
    }
}

/// Result of a search operation that may have edited the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEdit {
    /// The edited document, `None` when only the selection moved
    pub document: Option<Document>,
    pub selection: Selection,
}

impl SearchEdit {
    fn moved(selection: Selection) -> Self {
        Self {
            document: None,
            selection,
        }
    }
}

// =============================================================================
// Matching
// =============================================================================

fn fold(c: char, opts: SearchOptions) -> char {
    if opts.case_sensitive {
        return c;
    }
    // Keep offsets stable: only fold chars that lowercase to exactly one char
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn chars_equal(a: &str, b: &str, opts: SearchOptions) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| fold(x, opts) == fold(y, opts))
}

/// Char offsets where `needle` starts, overlapping matches included
fn match_starts(haystack: &[char], needle: &[char], opts: SearchOptions) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }
    let folded_needle: Vec<char> = needle.iter().map(|&c| fold(c, opts)).collect();
    let folded: Vec<char> = haystack.iter().map(|&c| fold(c, opts)).collect();
    folded
        .windows(folded_needle.len())
        .enumerate()
        .filter(|(_, window)| *window == folded_needle.as_slice())
        .map(|(i, _)| i)
        .collect()
}

/// All non-overlapping matches, left to right
pub fn find_all(text: &str, term: &str, opts: SearchOptions) -> Vec<Range<usize>> {
    let hay: Vec<char> = text.chars().collect();
    let needle: Vec<char> = term.chars().collect();
    let len = needle.len();

    let mut matches = Vec::new();
    let mut next_allowed = 0;
    for start in match_starts(&hay, &needle, opts) {
        if start >= next_allowed {
            matches.push(start..start + len);
            next_allowed = start + len;
        }
    }
    matches
}

/// First match starting at or after `from`; wraps to the first match in the
/// document when there is none.
pub fn find_next(text: &str, from: usize, term: &str, opts: SearchOptions) -> Option<Range<usize>> {
    let hay: Vec<char> = text.chars().collect();
    let needle: Vec<char> = term.chars().collect();
    let starts = match_starts(&hay, &needle, opts);
    let start = starts
        .iter()
        .copied()
        .find(|&s| s >= from)
        .or_else(|| starts.first().copied())?;
    Some(start..start + needle.len())
}

/// Last match starting at or before `from - 1` (saturating); wraps to the last
/// match in the document when there is none.
pub fn find_previous(text: &str, from: usize, term: &str, opts: SearchOptions) -> Option<Range<usize>> {
    let hay: Vec<char> = text.chars().collect();
    let needle: Vec<char> = term.chars().collect();
    let starts = match_starts(&hay, &needle, opts);
    let limit = from.saturating_sub(1);
    let start = starts
        .iter()
        .rev()
        .copied()
        .find(|&s| s <= limit)
        .or_else(|| starts.last().copied())?;
    Some(start..start + needle.len())
}

/// Replace every non-overlapping occurrence of `term`
pub fn replace_all(text: &str, term: &str, replacement: &str, opts: SearchOptions) -> String {
    let matches = find_all(text, term, opts);
    if matches.is_empty() {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for range in matches {
        out.extend(&chars[last..range.start]);
        out.push_str(replacement);
        last = range.end;
    }
    out.extend(&chars[last..]);
    out
}

// =============================================================================
// Selection-level operations
// =============================================================================

/// Select the first match in the document
pub fn find_first(doc: &Document, term: &str, opts: SearchOptions) -> Option<Selection> {
    find_next(&doc.text(), 0, term, opts).map(Selection::from)
}

/// Whether the current selection is exactly an occurrence of `term`
pub fn selection_matches(doc: &Document, sel: Selection, term: &str, opts: SearchOptions) -> bool {
    !term.is_empty() && !sel.is_caret() && chars_equal(&selected_text(doc, sel), term, opts)
}

/// Replace the selection if it is an occurrence of `term`, then select the
/// next occurrence. When the selection is anything else, only move to the next
/// occurrence after it.
///
/// Returns `None` for an empty term or when `term` does not occur.
pub fn replace(
    doc: &Document,
    sel: Selection,
    term: &str,
    replacement: &str,
    opts: SearchOptions,
) -> Option<SearchEdit> {
    if term.is_empty() {
        return None;
    }

    if !selection_matches(doc, sel, term, opts) {
        let next = find_next(&doc.text(), sel.max(), term, opts)?;
        return Some(SearchEdit::moved(next.into()));
    }

    let (new_doc, inserted) = replace_selection(doc, sel, replacement);
    let selection = find_next(&new_doc.text(), inserted.max(), term, opts)
        .map(Selection::from)
        .unwrap_or(inserted);
    Some(SearchEdit {
        document: Some(new_doc),
        selection,
    })
}

/// Convert the selection to `style` if it is an occurrence of `term`, then
/// select the next occurrence of `term` past the converted text (wrapping).
/// With no occurrences left the caret lands after the converted text.
///
/// When the selection is not an occurrence, this only moves to the next one.
pub fn change_case_at_match(
    doc: &Document,
    sel: Selection,
    term: &str,
    style: CaseStyle,
    dict: Option<&Dictionary>,
    opts: SearchOptions,
) -> Result<Option<SearchEdit>, CaseError> {
    if term.is_empty() {
        return Ok(None);
    }

    if !selection_matches(doc, sel, term, opts) {
        let next = find_next(&doc.text(), sel.max(), term, opts);
        return Ok(next.map(|r| SearchEdit::moved(r.into())));
    }

    let converted = convert_case(&selected_text(doc, sel), style, dict)?;
    let (new_doc, inserted) = replace_selection(doc, sel, &converted);
    let selection = find_next(&new_doc.text(), inserted.max(), term, opts)
        .map(Selection::from)
        .unwrap_or(Selection::caret(inserted.max()));
    Ok(Some(SearchEdit {
        document: Some(new_doc),
        selection,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CS: SearchOptions = SearchOptions {
        case_sensitive: true,
    };
    const CI: SearchOptions = SearchOptions {
        case_sensitive: false,
    };

    #[test]
    fn test_find_next_wraps() {
        assert_eq!(find_next("abXcd", 3, "X", CS), Some(2..3));
        assert_eq!(find_next("abXcd", 0, "X", CS), Some(2..3));
        assert_eq!(find_next("abXcd", 2, "X", CS), Some(2..3));
    }

    #[test]
    fn test_find_next_not_found() {
        assert_eq!(find_next("abc", 0, "z", CS), None);
        assert_eq!(find_next("abc", 0, "", CS), None);
    }

    #[test]
    fn test_find_previous() {
        let text = "X..X..X";
        assert_eq!(find_previous(text, 6, "X", CS), Some(3..4));
        assert_eq!(find_previous(text, 3, "X", CS), Some(0..1));
        assert_eq!(find_previous(text, 0, "X", CS), Some(0..1));
        assert_eq!(find_previous("..X", 1, "X", CS), Some(2..3));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(find_next("Hello HELLO", 1, "hello", CI), Some(6..11));
        assert_eq!(find_next("Hello HELLO", 1, "hello", CS), None);
        assert_eq!(replace_all("aXbxc", "x", "_", CI), "a_b_c");
    }

    #[test]
    fn test_char_offsets_with_multibyte() {
        assert_eq!(find_next("héé-é", 0, "é", CS), Some(1..2));
        assert_eq!(find_all("héé-é", "é", CS), vec![1..2, 2..3, 4..5]);
    }

    #[test]
    fn test_find_all_non_overlapping() {
        assert_eq!(find_all("aaaa", "aa", CS), vec![0..2, 2..4]);
    }

    #[test]
    fn test_replace_all() {
        assert_eq!(replace_all("aXbXc", "X", "_", CS), "a_b_c");
        assert_eq!(replace_all("aaa", "aa", "b", CS), "ba");
        assert_eq!(replace_all("abc", "", "_", CS), "abc");
    }

    #[test]
    fn test_replace_matching_selection() {
        let doc = Document::from_text("cat dog cat");
        let edit = replace(&doc, Selection::new(0, 3), "cat", "cow", CS).unwrap();
        assert_eq!(edit.document.unwrap().text(), "cow dog cat");
        assert_eq!(edit.selection, Selection::new(8, 11));
    }

    #[test]
    fn test_replace_unrelated_selection_only_moves() {
        let doc = Document::from_text("cat dog cat");
        let edit = replace(&doc, Selection::new(4, 7), "cat", "cow", CS).unwrap();
        assert!(edit.document.is_none());
        assert_eq!(edit.selection, Selection::new(8, 11));
    }

    #[test]
    fn test_replace_last_occurrence_keeps_inserted_selected() {
        let doc = Document::from_text("a cat");
        let edit = replace(&doc, Selection::new(2, 5), "cat", "dog", CS).unwrap();
        assert_eq!(edit.document.unwrap().text(), "a dog");
        assert_eq!(edit.selection, Selection::new(2, 5));
    }

    #[test]
    fn test_replace_empty_term_is_noop() {
        let doc = Document::from_text("abc");
        assert!(replace(&doc, Selection::new(0, 1), "", "x", CS).is_none());
    }

    #[test]
    fn test_change_case_walks_occurrences() {
        let dict: Dictionary = ["user", "name"].iter().collect();
        let doc = Document::from_text("username = username");

        let edit = change_case_at_match(
            &doc,
            Selection::new(0, 8),
            "username",
            CaseStyle::CamelCase,
            Some(&dict),
            CS,
        )
        .unwrap()
        .unwrap();
        let doc = edit.document.unwrap();
        assert_eq!(doc.text(), "userName = username");
        assert_eq!(edit.selection, Selection::new(11, 19));

        let edit = change_case_at_match(&doc, edit.selection, "username", CaseStyle::CamelCase, Some(&dict), CS)
            .unwrap()
            .unwrap();
        assert_eq!(edit.document.unwrap().text(), "userName = userName");
        assert_eq!(edit.selection, Selection::caret(19));
    }

    #[test]
    fn test_change_case_requires_dictionary() {
        let doc = Document::from_text("hello");
        let result = change_case_at_match(&doc, Selection::new(0, 5), "hello", CaseStyle::SnakeCase, None, CS);
        assert_eq!(result, Err(CaseError::DictionaryRequired(CaseStyle::SnakeCase)));
    }

    #[test]
    fn test_find_first() {
        let doc = Document::from_text("b a b");
        assert_eq!(find_first(&doc, "b", CS), Some(Selection::new(0, 1)));
        assert_eq!(find_first(&doc, "z", CS), None);
    }
}
