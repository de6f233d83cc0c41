//! Benchmarks for dictionary word segmentation and case conversion
//!
//! Run with: cargo bench --bench segmentation

use textpad::case::{convert_case, segment_words, CaseStyle, Dictionary};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "booking", "by", "count", "customer", "data",
    "date", "for", "from", "get", "has", "id", "in", "is", "item", "list", "load", "manager",
    "max", "min", "name", "of", "on", "order", "passenger", "passengers", "price", "request",
    "response", "service", "set", "start", "state", "the", "to", "total", "user", "value",
];

fn dictionary() -> Dictionary {
    WORDS.iter().collect()
}

/// Identifier made of `parts` dictionary words run together
fn identifier(parts: usize) -> String {
    WORDS.iter().cycle().skip(7).take(parts).copied().collect()
}

// ============================================================================
// Segmentation
// ============================================================================

#[divan::bench(args = [2, 4, 8, 16, 32])]
fn segment_identifier(bencher: divan::Bencher, parts: usize) {
    let dict = dictionary();
    let input = identifier(parts);
    bencher.bench(|| segment_words(divan::black_box(&input), &dict));
}

#[divan::bench(args = [16, 64, 256])]
fn segment_unsegmentable(bencher: divan::Bencher, len: usize) {
    // Falls back to the whole input after filling the DP table
    let dict = dictionary();
    let input = "z".repeat(len);
    bencher.bench(|| segment_words(divan::black_box(&input), &dict));
}

#[divan::bench]
fn parse_word_list() -> Dictionary {
    let list = WORDS.repeat(200).join("\n");
    Dictionary::parse(divan::black_box(&list))
}

// ============================================================================
// Conversion
// ============================================================================

#[divan::bench(args = [CaseStyle::SnakeCase, CaseStyle::CamelCase, CaseStyle::TitleCase])]
fn convert_identifier(bencher: divan::Bencher, style: CaseStyle) {
    let dict = dictionary();
    let input = identifier(8);
    bencher.bench(|| convert_case(divan::black_box(&input), style, Some(&dict)));
}
