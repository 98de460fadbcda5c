//! Segmenter — split normalized text into sentences.

use regex::Regex;
use std::sync::LazyLock;

static RE_SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^。！？；\n]+[。！？；]?").unwrap());

/// Split on sentence-final marks; fall back to lines when no mark-delimited
/// sentence is found.
pub fn split_sentences(text: &str) -> Vec<String> {
    let raw = text.replace('\r', "");
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    let sentences: Vec<String> = RE_SENTENCE
        .find_iter(raw)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if !sentences.is_empty() {
        return sentences;
    }

    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
