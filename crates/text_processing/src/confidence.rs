//! Positional word-diff confidence scoring
//!
//! Compares the i-th whitespace-delimited word of the original with the i-th
//! word of the rewrite. This is not an alignment: one inserted word (a filler,
//! say) shifts every later index and counts all of them as changed. That
//! inflation is accepted behavior; swap in another [`ConfidenceScorer`] to
//! change it.

use humanizer_core::{BypassTier, ConfidenceScore, ConfidenceScorer};

/// Score for an untouched text, before clamping
const BASELINE: f64 = 100.0;
/// Points removed when every original word changed
const CHANGE_PENALTY: f64 = 20.0;
const FLOOR: f64 = 75.0;
const CEILING: f64 = 95.0;

/// Counts original positions whose rewritten word differs or is missing
pub fn changed_word_count(original: &str, transformed: &str) -> (usize, usize) {
    let transformed_words: Vec<&str> = transformed.split_whitespace().collect();
    let mut total = 0;
    let mut changed = 0;

    for (i, word) in original.split_whitespace().enumerate() {
        total += 1;
        if transformed_words.get(i) != Some(&word) {
            changed += 1;
        }
    }

    (changed, total)
}

/// Default scorer: `clamp(100 - changed_fraction * 20, 75, 95)`, rounded
#[derive(Debug, Clone, Copy)]
pub struct PositionalWordDiff {
    floor: f64,
    ceiling: f64,
}

impl PositionalWordDiff {
    pub fn new() -> Self {
        Self {
            floor: FLOOR,
            ceiling: CEILING,
        }
    }

    /// Unrounded, clamped score for a changed fraction
    fn raw_score(&self, changed_fraction: f64) -> f64 {
        (BASELINE - changed_fraction * CHANGE_PENALTY).clamp(self.floor, self.ceiling)
    }
}

impl Default for PositionalWordDiff {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfidenceScorer for PositionalWordDiff {
    fn score(&self, original: &str, transformed: &str) -> ConfidenceScore {
        let (changed_words, total_words) = changed_word_count(original, transformed);
        let changed_fraction = if total_words == 0 {
            0.0
        } else {
            changed_words as f64 / total_words as f64
        };

        let raw = self.raw_score(changed_fraction);

        ConfidenceScore {
            confidence: raw.round() as u8,
            tier: BypassTier::from_confidence(raw),
            changed_words,
            total_words,
        }
    }

    fn name(&self) -> &'static str {
        "positional_word_diff"
    }
}
