//! Normalizer — whitespace collapse, filler stripping, repeated punctuation.

use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_REPEATED_TERMINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([。！？；])[。！？；]+").unwrap());

/// Discourse markers deleted when filler cleaning is on, applied in this order.
pub const FILLERS: &[&str] = &[
    "其实", "实际上", "总的来说", "值得注意的是", "可以看到", "可以说",
    "另外", "与此同时", "当然", "显然", "的确", "基本上", "不过",
    "就是说", "换句话说", "例如", "比如",
];

/// Collapse every whitespace run to one space.
pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").into_owned()
}

/// Delete every occurrence of each filler phrase.
pub fn strip_fillers(text: &str) -> String {
    FILLERS
        .iter()
        .fold(text.to_string(), |acc, filler| acc.replace(filler, ""))
}

/// Collapse runs of sentence-final marks to the first mark of the run.
pub fn collapse_terminal_punct(text: &str) -> String {
    RE_REPEATED_TERMINAL.replace_all(text, "$1").into_owned()
}

/// Apply all normalization passes.
pub fn normalize(text: &str, clean_fillers: bool) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut result = collapse_whitespace(text);
    if clean_fillers {
        result = strip_fillers(&result);
    }
    result = collapse_terminal_punct(&result);
    result.trim().to_string()
}
