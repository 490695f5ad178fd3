//! Core traits and types for the text humanizer
//!
//! This crate provides foundational types used across all other crates:
//! - Substitution rules and rule groups
//! - Rewrite modes, bypass tiers and transformation results
//! - Pluggable seams (randomness, confidence scoring)
//! - Error types

pub mod error;
pub mod humanize;
pub mod rule;
pub mod traits;

pub use error::{Error, Result};
pub use humanize::{BypassTier, ConfidenceScore, HumanizeMode, TransformationResult};
pub use rule::{Rule, RuleGroup};

pub use traits::{ConfidenceScorer, RandomSource};
