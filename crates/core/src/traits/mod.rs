//! Core traits for the humanizer
//!
//! ```text
//! Randomness:
//!   - RandomSource: every randomized step draws from an injected source
//!
//! Scoring:
//!   - ConfidenceScorer: rates how far a rewrite moved from its input
//! ```

mod random;
mod scoring;

pub use random::RandomSource;
pub use scoring::ConfidenceScorer;
