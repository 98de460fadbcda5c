//! Simplification pipeline — orchestrates all stages.

use crate::{dedup, keywords, normalize, score, segment, select, vector};
use crate::select::SelectPolicy;
use crate::vector::CharVector;
use tracing::debug;
use ts_core::{SimplifyParams, SimplifyRequest, SimplifyResult};

/// The main simplifier pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifierPipeline {
    pub params: SimplifyParams,
}

impl SimplifierPipeline {
    pub fn new(params: SimplifyParams) -> Self {
        Self { params }
    }

    /// Simplify text through the pipeline.
    pub fn simplify(&self, text: &str) -> SimplifyResult {
        let p = &self.params;

        let cleaned = normalize::normalize(text, p.clean_fillers);
        let sentences = segment::split_sentences(&cleaned);
        if sentences.is_empty() {
            return SimplifyResult::empty();
        }
        let orig_len = vector::stripped_len(&cleaned);

        // Vectors are built once and reused by both dedup passes.
        let all_vectors: Vec<CharVector> = sentences.iter().map(|s| CharVector::from_text(s)).collect();
        let split = if p.dedupe {
            dedup::find_duplicates(&all_vectors, p.dup_threshold)
        } else {
            dedup::DedupSplit {
                kept: (0..sentences.len()).collect(),
                removed: Vec::new(),
            }
        };
        let pool: Vec<&str> = split.kept.iter().map(|&i| sentences[i].as_str()).collect();
        let vectors: Vec<CharVector> = split.kept.iter().map(|&i| all_vectors[i].clone()).collect();
        let lengths: Vec<usize> = pool.iter().map(|s| vector::stripped_len(s)).collect();

        let keyword_set = keywords::top_keywords(&pool, keywords::KEYWORD_COUNT);
        let scores = score::score_pool(&pool, &keyword_set);
        let policy = SelectPolicy {
            target_chars: select::target_chars(orig_len, p.compress_ratio),
            dup_threshold: p.dedupe.then_some(p.dup_threshold),
            preserve_order: p.preserve_order,
        };
        debug!(
            sentences = sentences.len(),
            pool = pool.len(),
            keywords = keyword_set.len(),
            orig_len,
            target = policy.target_chars,
            "pool scored"
        );
        let picked = select::select(&scores, &lengths, &vectors, policy);

        let text = picked
            .iter()
            .map(|&i| pool[i])
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();

        // Containment check against the joined text; a short sentence that
        // occurs inside a kept one is not reported.
        let mut removed: Vec<String> = sentences
            .iter()
            .filter(|s| !text.contains(s.as_str()))
            .cloned()
            .collect();
        removed.extend(split.removed.iter().map(|&i| sentences[i].clone()));

        let new_len = vector::stripped_len(&text);
        SimplifyResult {
            text,
            removed,
            orig_len,
            new_len,
        }
    }
}

/// Simplify one request with its own parameters.
pub fn simplify(request: &SimplifyRequest) -> SimplifyResult {
    SimplifierPipeline::new(request.params).simplify(&request.text)
}
