//! Character-frequency vectors and the stripped-text measure shared by all stages.

use std::collections::HashMap;

/// Punctuation dropped, together with all whitespace, before counting characters.
pub const STRIP_PUNCT: &str = "，,。.！？?!；;：:()（）[]『』“”\"'";

#[inline]
pub fn is_stripped(c: char) -> bool {
    c.is_whitespace() || STRIP_PUNCT.contains(c)
}

/// Characters of `text` that survive stripping, in order.
pub fn stripped_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|&c| !is_stripped(c))
}

pub fn stripped(text: &str) -> String {
    stripped_chars(text).collect()
}

/// Stripped length in Unicode scalar values.
pub fn stripped_len(text: &str) -> usize {
    stripped_chars(text).count()
}

/// Occurrence count per character of a sentence's stripped text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharVector {
    counts: HashMap<char, u32>,
    norm_sq: f64,
}

impl CharVector {
    pub fn from_text(text: &str) -> Self {
        let mut counts: HashMap<char, u32> = HashMap::new();
        for c in stripped_chars(text) {
            *counts.entry(c).or_insert(0) += 1;
        }
        let norm_sq = counts.values().map(|&v| (v as f64) * (v as f64)).sum();
        Self { counts, norm_sq }
    }

    pub fn get(&self, c: char) -> u32 {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// L2 norm over all counts.
    pub fn norm(&self) -> f64 {
        self.norm_sq.sqrt()
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Cosine similarity of two vectors; 0 when either norm is 0.
///
/// Divides by the root of the product of squared norms so identical vectors
/// score exactly 1.0.
pub fn cosine(a: &CharVector, b: &CharVector) -> f64 {
    if a.norm_sq == 0.0 || b.norm_sq == 0.0 {
        return 0.0;
    }
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .counts
        .iter()
        .map(|(&c, &v)| v as f64 * large.get(c) as f64)
        .sum();
    dot / (a.norm_sq * b.norm_sq).sqrt()
}

/// True when `v` is at least `threshold`-similar to any vector in `against`.
pub fn is_near_duplicate<'a>(
    v: &CharVector,
    against: impl IntoIterator<Item = &'a CharVector>,
    threshold: f64,
) -> bool {
    against.into_iter().any(|other| cosine(v, other) >= threshold)
}
