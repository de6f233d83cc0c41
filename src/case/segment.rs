//! Dictionary-based word segmentation.
//!
//! Splits an unbroken string (`bookingpassengers`) into the fewest dictionary
//! words (`booking`, `passengers`) with a dynamic program over prefixes.
//! Among splits with the same word count, the first one reached while
//! scanning start positions left to right wins.

use super::dictionary::Dictionary;

/// Lowercase the input and drop underscores
pub fn normalize(input: &str) -> String {
    input.to_lowercase().chars().filter(|&c| c != '_').collect()
}

/// Segment `input` into dictionary words.
///
/// Returns an empty vector for empty input, and the whole normalized input
/// as a single word when no split covers it.
pub fn segment_words(input: &str, dict: &Dictionary) -> Vec<String> {
    let normalized = normalize(input);
    let chars: Vec<char> = normalized.chars().collect();
    let n = chars.len();
    if n == 0 {
        return Vec::new();
    }

    // best[j] = (word count, start of last word) for the best split of chars[..j]
    let mut best: Vec<Option<(usize, usize)>> = vec![None; n + 1];
    best[0] = Some((0, 0));
    let max_len = dict.max_word_len();

    let mut candidate = String::new();
    for i in 0..n {
        let Some((count, _)) = best[i] else {
            continue;
        };
        candidate.clear();
        for j in (i + 1)..=n.min(i + max_len) {
            candidate.push(chars[j - 1]);
            if !dict.contains(&candidate) {
                continue;
            }
            let replace = match best[j] {
                None => true,
                Some((existing, _)) => count + 1 < existing,
            };
            if replace {
                best[j] = Some((count + 1, i));
            }
        }
    }

    if best[n].is_none() {
        return vec![normalized];
    }

    let mut words = Vec::new();
    let mut end = n;
    while end > 0 {
        let Some((_, start)) = best[end] else {
            break;
        };
        words.push(chars[start..end].iter().collect());
        end = start;
    }
    words.reverse();
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        words.iter().collect()
    }

    #[test]
    fn test_segment_two_words() {
        let d = dict(&["booking", "passengers", "pass", "engers", "book", "king"]);
        assert_eq!(segment_words("bookingpassengers", &d), vec!["booking", "passengers"]);
    }

    #[test]
    fn test_segment_lowercases_and_drops_underscores() {
        let d = dict(&["hello", "world"]);
        assert_eq!(segment_words("Hello_World", &d), vec!["hello", "world"]);
        assert_eq!(segment_words("HELLOWORLD", &d), vec!["hello", "world"]);
    }

    #[test]
    fn test_segment_fallback_is_whole_input() {
        let d = dict(&["hello"]);
        assert_eq!(segment_words("HelloXyz", &d), vec!["helloxyz"]);
    }

    #[test]
    fn test_segment_empty() {
        let d = dict(&["a"]);
        assert!(segment_words("", &d).is_empty());
        assert!(segment_words("___", &d).is_empty());
    }

    #[test]
    fn test_segment_prefers_fewest_words() {
        let d = dict(&["a", "b", "c", "abc"]);
        assert_eq!(segment_words("abc", &d), vec!["abc"]);
    }

    #[test]
    fn test_segment_tie_keeps_leftmost_scan() {
        // "a|bcd" lands on best[4] from i=1 before "ab|cd" arrives from i=2
        let d = dict(&["ab", "cd", "a", "bcd"]);
        assert_eq!(segment_words("abcd", &d), vec!["a", "bcd"]);
    }

    #[test]
    fn test_segment_with_empty_dictionary() {
        let d = Dictionary::default();
        assert_eq!(segment_words("abc", &d), vec!["abc"]);
    }
}
