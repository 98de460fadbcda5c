//! Greedy budget-constrained sentence selection.

use crate::score::ScoreEntry;
use crate::vector::{is_near_duplicate, CharVector};
use std::ops::ControlFlow;
use tracing::debug;

/// How the selector walks the ranked pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectPolicy {
    /// Stripped characters to accumulate before stopping.
    pub target_chars: usize,
    /// Skip candidates this similar to an already selected sentence.
    pub dup_threshold: Option<f64>,
    pub preserve_order: bool,
}

/// Stripped-character budget for the kept text, at least 1.
pub fn target_chars(orig_len: usize, compress_ratio: i32) -> usize {
    let keep_ratio = (100.0 - compress_ratio as f64) / 100.0;
    let target = (orig_len as f64 * keep_ratio).round();
    if target < 1.0 {
        1
    } else {
        target as usize
    }
}

/// Entries by descending score; equal scores keep pool order.
pub fn rank(scores: &[ScoreEntry]) -> Vec<ScoreEntry> {
    let mut ranked = scores.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

#[derive(Debug, Default)]
struct Selection {
    picked: Vec<usize>,
    accumulated: usize,
}

/// Pick pool indices highest score first until the budget is met, then
/// order them for output. Never empty for a non-empty pool.
pub fn select(
    scores: &[ScoreEntry],
    lengths: &[usize],
    vectors: &[CharVector],
    policy: SelectPolicy,
) -> Vec<usize> {
    let ranked = rank(scores);
    let outcome = ranked.iter().try_fold(Selection::default(), |mut sel, entry| {
        if let Some(threshold) = policy.dup_threshold {
            let chosen = sel.picked.iter().map(|&i| &vectors[i]);
            if is_near_duplicate(&vectors[entry.index], chosen, threshold) {
                return ControlFlow::Continue(sel);
            }
        }
        sel.picked.push(entry.index);
        sel.accumulated += lengths[entry.index];
        if sel.accumulated >= policy.target_chars {
            ControlFlow::Break(sel)
        } else {
            ControlFlow::Continue(sel)
        }
    });
    let Selection { mut picked, accumulated } = match outcome {
        ControlFlow::Break(sel) | ControlFlow::Continue(sel) => sel,
    };

    if picked.is_empty() && !scores.is_empty() {
        picked.push(0);
    }
    if policy.preserve_order {
        picked.sort_unstable();
    }

    debug!(
        candidates = scores.len(),
        selected = picked.len(),
        accumulated,
        target = policy.target_chars,
        "selection done"
    );
    picked
}
