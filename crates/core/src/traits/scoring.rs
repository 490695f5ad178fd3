//! Confidence scoring trait
//!
//! The shipped scorer is a positional word diff, a known approximation. It
//! sits behind this trait so a smarter alignment can replace it without
//! touching the pipeline.

use crate::ConfidenceScore;

/// Rates a rewrite against its original text
pub trait ConfidenceScorer: Send + Sync {
    /// Score `transformed` against `original`
    fn score(&self, original: &str, transformed: &str) -> ConfidenceScore;

    /// Scorer name for logging
    fn name(&self) -> &'static str;
}
