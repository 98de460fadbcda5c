//! Text simplifier engine — extractive sentence-level compression.
//!
//! Stages:
//! 1. Normalize (whitespace, filler phrases, repeated terminal punctuation)
//! 2. Segment into sentences
//! 3. Dedup — near-duplicate removal via character-frequency cosine similarity
//! 4. Keywords — top frequent meaningful characters of the pool
//! 5. Score — keyword density, position, numeric hints, length, commas
//! 6. Select — greedy budget-constrained pick, then assemble

pub mod dedup;
pub mod keywords;
pub mod normalize;
pub mod pipeline;
pub mod score;
pub mod segment;
pub mod select;
pub mod vector;

pub use pipeline::{simplify, SimplifierPipeline};
pub use ts_core::{SimplifyParams, SimplifyRequest, SimplifyResult};
