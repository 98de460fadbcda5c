//! Request and result types for a single simplification call.

use serde::{Deserialize, Serialize};

/// Tunable parameters of one simplification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifyParams {
    /// Percent of characters to remove.
    pub compress_ratio: i32,
    /// Cosine similarity at or above which two sentences are duplicates.
    pub dup_threshold: f64,
    /// Enables both duplicate-removal passes.
    pub dedupe: bool,
    /// Keep selected sentences in their original order instead of score order.
    pub preserve_order: bool,
    /// Strip discourse-marker filler phrases before segmenting.
    pub clean_fillers: bool,
}

impl Default for SimplifyParams {
    fn default() -> Self {
        Self {
            compress_ratio: 40,
            dup_threshold: 0.8,
            dedupe: true,
            preserve_order: true,
            clean_fillers: true,
        }
    }
}

impl SimplifyParams {
    pub fn with_compress_ratio(mut self, ratio: i32) -> Self {
        self.compress_ratio = ratio;
        self
    }

    pub fn with_dup_threshold(mut self, threshold: f64) -> Self {
        self.dup_threshold = threshold;
        self
    }

    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    pub fn with_preserve_order(mut self, preserve: bool) -> Self {
        self.preserve_order = preserve;
        self
    }

    pub fn with_clean_fillers(mut self, clean: bool) -> Self {
        self.clean_fillers = clean;
        self
    }

    /// Copy with `compress_ratio` clamped to `[0, 100]`.
    pub fn clamped(self) -> Self {
        Self {
            compress_ratio: self.compress_ratio.clamp(0, 100),
            ..self
        }
    }
}

/// Text plus the parameters to simplify it with.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifyRequest {
    pub text: String,
    pub params: SimplifyParams,
}

impl SimplifyRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: SimplifyParams::default(),
        }
    }

    pub fn with_params(mut self, params: SimplifyParams) -> Self {
        self.params = params;
        self
    }
}

/// Simplified text and the sentences dropped to produce it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifyResult {
    pub text: String,
    pub removed: Vec<String>,
    /// Stripped length of the normalized input.
    pub orig_len: usize,
    /// Stripped length of `text`.
    pub new_len: usize,
}

impl SimplifyResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn reduction_pct(&self) -> f64 {
        if self.orig_len == 0 {
            return 0.0;
        }
        (self.orig_len as f64 - self.new_len as f64) / self.orig_len as f64 * 100.0
    }
}
