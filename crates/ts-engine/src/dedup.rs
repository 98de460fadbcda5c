//! Dedup — greedy, order-preserving near-duplicate removal.
//!
//! Each sentence is compared only against sentences already kept, so the
//! outcome depends on input order and the pass is inherently sequential.

use crate::vector::{is_near_duplicate, CharVector};
use tracing::debug;

pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Indices kept and removed by one dedup pass, both in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupSplit {
    pub kept: Vec<usize>,
    pub removed: Vec<usize>,
}

/// Partition precomputed vectors into kept and duplicate indices.
pub fn find_duplicates(vectors: &[CharVector], threshold: f64) -> DedupSplit {
    let mut split = DedupSplit::default();
    for (i, v) in vectors.iter().enumerate() {
        let kept = split.kept.iter().map(|&k| &vectors[k]);
        if is_near_duplicate(v, kept, threshold) {
            split.removed.push(i);
        } else {
            split.kept.push(i);
        }
    }
    debug!(
        total = vectors.len(),
        kept = split.kept.len(),
        removed = split.removed.len(),
        threshold,
        "dedup pass"
    );
    split
}

/// Dedup sentences, returning `(kept, removed)` texts in original order.
pub fn dedupe(sentences: &[String], threshold: f64) -> (Vec<String>, Vec<String>) {
    let vectors: Vec<CharVector> = sentences.iter().map(|s| CharVector::from_text(s)).collect();
    let split = find_duplicates(&vectors, threshold);
    let pick = |idxs: &[usize]| idxs.iter().map(|&i| sentences[i].clone()).collect::<Vec<_>>();
    (pick(&split.kept), pick(&split.removed))
}
