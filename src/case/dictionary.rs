//! Word list used by the segmenter.

use std::collections::HashSet;
use std::path::Path;

/// Immutable set of lowercase words.
///
/// Built once (usually on a worker thread) and then shared read-only,
/// typically as `Arc<Dictionary>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
    /// Length of the longest word in chars; bounds the segmenter's inner loop
    max_word_len: usize,
}

impl Dictionary {
    /// Parse a newline-separated word list. Words are trimmed and lowercased;
    /// blank lines are skipped. Every other line is a word, `#` included.
    pub fn parse(list: &str) -> Self {
        list.lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect()
    }

    /// Read and parse a word list file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let dict = Self::parse(&content);
        tracing::debug!(path = %path.display(), words = dict.len(), "Loaded dictionary");
        Ok(dict)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dict = Dictionary::default();
        for word in iter {
            let word = word.as_ref().to_lowercase();
            if word.is_empty() {
                continue;
            }
            dict.max_word_len = dict.max_word_len.max(word.chars().count());
            dict.words.insert(word);
        }
        dict
    }
}
