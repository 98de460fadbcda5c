//! Keyword extraction — most frequent meaningful characters of a pool.

use crate::vector::stripped_chars;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

pub const KEYWORD_COUNT: usize = 18;

/// Grammatical function characters never treated as keywords.
pub const STOP_CHARS: &[char] = &[
    '的', '了', '是', '在', '和', '我', '有', '与', '就', '也', '为', '不', '人', '中', '上', '他', '她',
];

static STOP_SET: LazyLock<HashSet<char>> = LazyLock::new(|| STOP_CHARS.iter().copied().collect());

pub fn is_stop_char(c: char) -> bool {
    STOP_SET.contains(&c)
}

fn qualifies(c: char) -> bool {
    !c.is_ascii_alphanumeric() && !is_stop_char(c)
}

/// Qualifying characters with their tallies, most frequent first.
/// Ties keep first-seen order.
pub fn char_frequencies<S: AsRef<str>>(sentences: &[S]) -> Vec<(char, usize)> {
    let mut order: Vec<(char, usize)> = Vec::new();
    let mut slot: HashMap<char, usize> = HashMap::new();
    for s in sentences {
        for c in stripped_chars(s.as_ref()).filter(|&c| qualifies(c)) {
            match slot.get(&c) {
                Some(&i) => order[i].1 += 1,
                None => {
                    slot.insert(c, order.len());
                    order.push((c, 1));
                }
            }
        }
    }
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

/// Top `k` keyword characters of the pool.
pub fn top_keywords<S: AsRef<str>>(sentences: &[S], k: usize) -> HashSet<char> {
    char_frequencies(sentences)
        .into_iter()
        .take(k)
        .map(|(c, _)| c)
        .collect()
}
