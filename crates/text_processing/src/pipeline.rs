//! Unified humanizer pipeline

use humanizer_core::{ConfidenceScore, ConfidenceScorer, HumanizeMode, RandomSource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    confidence::PositionalWordDiff,
    normalizer,
    rules::{self, RuleApplier, RuleCatalog, RuleSelector},
    sentences::FillerInjector,
    Result, TextProcessingError,
};

/// Configuration for the humanizer pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanizerConfig {
    /// Independent chance that each eligible rule is applied
    #[serde(default = "default_rule_probability")]
    pub rule_probability: f64,
    /// Independent chance that each sentence gets a filler
    #[serde(default = "default_filler_probability")]
    pub filler_probability: f64,
}

fn default_rule_probability() -> f64 {
    0.7
}

fn default_filler_probability() -> f64 {
    0.3
}

impl Default for HumanizerConfig {
    fn default() -> Self {
        Self {
            rule_probability: default_rule_probability(),
            filler_probability: default_filler_probability(),
        }
    }
}

/// Rewrites text and scores the rewrite
///
/// Holds only read-only state, so one instance is shared by every request.
/// All per-call randomness comes from the `RandomSource` handed to each call.
pub struct HumanizerPipeline {
    catalog: &'static RuleCatalog,
    selector: RuleSelector,
    applier: RuleApplier,
    injector: FillerInjector,
    scorer: Arc<dyn ConfidenceScorer>,
}

impl HumanizerPipeline {
    /// Create a pipeline over the built-in catalog with the positional scorer
    pub fn new(config: HumanizerConfig) -> Result<Self> {
        for (name, value) in [
            ("rule_probability", config.rule_probability),
            ("filler_probability", config.filler_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TextProcessingError::InvalidConfig(format!(
                    "{} must be between 0.0 and 1.0, got {}",
                    name, value
                )));
            }
        }

        Ok(Self {
            catalog: rules::catalog(),
            selector: RuleSelector::new(config.rule_probability),
            applier: RuleApplier::new(),
            injector: FillerInjector::new(config.filler_probability),
            scorer: Arc::new(PositionalWordDiff::new()),
        })
    }

    /// Replace the confidence scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn ConfidenceScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn catalog(&self) -> &RuleCatalog {
        self.catalog
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Run the three rewrite passes
    ///
    /// Order: rules → sentence fillers → normalization
    pub fn rewrite(
        &self,
        text: &str,
        mode: HumanizeMode,
        rng: &mut dyn RandomSource,
    ) -> Rewritten {
        let selected = self.selector.select(self.catalog, mode, rng);
        let applied = self.applier.apply(text, &selected);
        let fillers = self.injector.apply(&applied.text, rng);
        let normalized = normalizer::normalize(&fillers.text);

        let trace = RewriteTrace {
            mode,
            rules_selected: applied.selected,
            rules_matched: applied.matched,
            sentences: fillers.sentences,
            fillers_injected: fillers.injected,
        };

        tracing::debug!(
            mode = %mode,
            rules_selected = trace.rules_selected,
            rules_matched = trace.rules_matched.len(),
            sentences = trace.sentences,
            fillers = trace.fillers_injected,
            "Rewrite complete"
        );

        Rewritten {
            text: normalized,
            trace,
        }
    }

    /// Rewrite `text` and score the result against the original
    pub fn humanize(
        &self,
        text: &str,
        mode: HumanizeMode,
        rng: &mut dyn RandomSource,
    ) -> Humanized {
        let rewritten = self.rewrite(text, mode, rng);
        let score = self.scorer.score(text, &rewritten.text);

        tracing::debug!(
            scorer = self.scorer.name(),
            confidence = score.confidence,
            tier = %score.tier,
            changed_words = score.changed_words,
            total_words = score.total_words,
            "Rewrite scored"
        );

        Humanized {
            text: rewritten.text,
            score,
            trace: rewritten.trace,
        }
    }
}

/// Rewritten text plus what happened to it
#[derive(Debug, Clone)]
pub struct Rewritten {
    pub text: String,
    pub trace: RewriteTrace,
}

/// Scored rewrite
#[derive(Debug, Clone)]
pub struct Humanized {
    pub text: String,
    pub score: ConfidenceScore,
    pub trace: RewriteTrace,
}

/// Per-call record of the rewrite passes
#[derive(Debug, Clone, Serialize)]
pub struct RewriteTrace {
    pub mode: HumanizeMode,
    /// Rules that survived the inclusion draw
    pub rules_selected: usize,
    /// Rules that changed the text, in application order
    pub rules_matched: Vec<&'static str>,
    pub sentences: usize,
    pub fillers_injected: usize,
}
