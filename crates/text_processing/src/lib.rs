//! Text rewriting pipeline for the humanizer
//!
//! This crate turns formal, machine-sounding prose into a more casual
//! register:
//! - **Rules**: randomized lexical and contraction substitutions
//! - **Sentences**: segmentation and conversational filler injection
//! - **Normalizer**: whitespace collapse and sentence capitalization
//! - **Confidence**: heuristic score of how much the text changed
//!
//! # Example
//!
//! ```ignore
//! use humanizer_core::HumanizeMode;
//! use humanizer_text_processing::{HumanizerConfig, HumanizerPipeline, StdRandom};
//!
//! let pipeline = HumanizerPipeline::new(HumanizerConfig::default())?;
//! let mut rng = StdRandom::from_entropy();
//! let result = pipeline.humanize("In conclusion, this is important.", HumanizeMode::Standard, &mut rng);
//! println!("{} ({}%)", result.text, result.score.confidence);
//! ```

pub mod confidence;
pub mod normalizer;
pub mod random;
pub mod rules;
pub mod sentences;

mod error;
mod pipeline;

pub use error::{Result, TextProcessingError};
pub use pipeline::{HumanizerConfig, HumanizerPipeline, Humanized, RewriteTrace, Rewritten};

pub use confidence::PositionalWordDiff;
pub use random::{ScriptedRandom, StdRandom};
pub use rules::{catalog, RuleCatalog};
pub use sentences::FillerInjector;
