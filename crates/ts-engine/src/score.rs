//! Heuristic sentence salience scoring.

use crate::vector::stripped;
use std::collections::HashSet;

const KEYWORD_WEIGHT: i32 = 2;
const EDGE_BONUS: i32 = 2;
const EDGE_SPAN: usize = 2;
const NUMERIC_BONUS: i32 = 2;
const SHORT_LEN: usize = 6;
const LONG_LEN: usize = 80;
const VERY_LONG_LEN: usize = 200;
const MAX_COMMA_BONUS: i32 = 2;

/// Score of one pool sentence. Only comparable within one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    pub index: usize,
    pub score: i32,
}

/// Digits (ASCII or fullwidth), percent notation, or date-unit characters.
pub fn has_numeric_hint(text: &str) -> bool {
    text.contains("百分之")
        || text
            .chars()
            .any(|c| c.is_ascii_digit() || ('０'..='９').contains(&c) || matches!(c, '%' | '年' | '月' | '日'))
}

fn comma_count(text: &str) -> usize {
    text.chars().filter(|&c| c == '，' || c == ',').count()
}

/// Score the sentence at `index` of a pool of `total` sentences.
pub fn score_sentence(text: &str, index: usize, total: usize, keywords: &HashSet<char>) -> i32 {
    let body = stripped(text);
    let len = body.chars().count();
    let mut score = 0;

    let hits = body.chars().filter(|c| keywords.contains(c)).count() as i32;
    score += hits * KEYWORD_WEIGHT;

    if index < EDGE_SPAN {
        score += EDGE_BONUS;
    }
    if index + EDGE_SPAN >= total {
        score += EDGE_BONUS;
    }
    if has_numeric_hint(text) {
        score += NUMERIC_BONUS;
    }

    // Length penalties stack: a very long sentence takes both.
    if len < SHORT_LEN {
        score -= 1;
    }
    if len > VERY_LONG_LEN {
        score -= 3;
    }
    if len > LONG_LEN {
        score -= 1;
    }

    score += (comma_count(text) as i32).min(MAX_COMMA_BONUS);
    score
}

/// Score every sentence of the pool, in pool order.
pub fn score_pool<S: AsRef<str>>(pool: &[S], keywords: &HashSet<char>) -> Vec<ScoreEntry> {
    let total = pool.len();
    pool.iter()
        .enumerate()
        .map(|(index, s)| ScoreEntry {
            index,
            score: score_sentence(s.as_ref(), index, total, keywords),
        })
        .collect()
}
