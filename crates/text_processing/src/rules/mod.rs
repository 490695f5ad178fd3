//! Substitution rule catalog
//!
//! Two groups of rules, compiled once on first use and shared read-only:
//! - **Lexical**: formal transitions and hedges rewritten to casual phrasing
//! - **Contraction**: negated verb forms rewritten to contractions
//!
//! Every rule is case-insensitive and replaces all non-overlapping matches.

mod selector;

pub use selector::{shuffle, AppliedRules, RuleApplier, RuleSelector};

use humanizer_core::{HumanizeMode, Rule, RuleGroup};
use once_cell::sync::Lazy;

use crate::Result;

/// Formal phrase -> casual replacement
const LEXICAL: &[(&str, &str)] = &[
    // Transitions
    ("In conclusion,", "To wrap up,"),
    ("Furthermore,", "What's more,"),
    ("Moreover,", "Plus,"),
    ("However,", "But,"),
    ("Nevertheless,", "Still,"),
    ("Consequently,", "As a result,"),
    ("Therefore,", "So,"),
    ("Additionally,", "Also,"),
    ("Subsequently,", "After that,"),
    ("Ultimately,", "In the end,"),
    // Hedges
    ("It is important to note that", "Worth mentioning that"),
    ("It should be noted that", "Keep in mind that"),
    ("It is worth mentioning that", "I should point out that"),
    ("It is crucial to understand that", "Here's the thing -"),
    ("It is essential to recognize that", "What's key is that"),
    // Formal address
    ("One must consider", "You should think about"),
    ("One should take into account", "Don't forget to consider"),
    ("It is recommended that", "I'd suggest"),
    ("It is advisable to", "You might want to"),
    ("It is beneficial to", "It helps to"),
];

/// Negated verb form -> contraction
const CONTRACTIONS: &[(&str, &str)] = &[
    ("do not", "don't"),
    ("cannot", "can't"),
    ("will not", "won't"),
    ("is not", "isn't"),
    ("are not", "aren't"),
    ("was not", "wasn't"),
    ("were not", "weren't"),
    ("have not", "haven't"),
    ("has not", "hasn't"),
    ("had not", "hadn't"),
    ("would not", "wouldn't"),
    ("should not", "shouldn't"),
    ("could not", "couldn't"),
];

static CATALOG: Lazy<RuleCatalog> =
    Lazy::new(|| RuleCatalog::builtin().expect("built-in rule catalog must compile"));

/// The process-wide built-in catalog
pub fn catalog() -> &'static RuleCatalog {
    &CATALOG
}

/// Ordered, immutable set of rules: lexical group first, then contractions
#[derive(Debug)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Compile the built-in lexical and contraction tables
    pub fn builtin() -> Result<Self> {
        let lexical = LEXICAL
            .iter()
            .map(|&(phrase, replacement)| Rule::phrase(RuleGroup::Lexical, phrase, replacement));
        let contractions = CONTRACTIONS.iter().map(|&(phrase, replacement)| {
            Rule::phrase(RuleGroup::Contraction, phrase, replacement)
        });

        let rules = lexical
            .chain(contractions)
            .collect::<humanizer_core::Result<Vec<_>>>()?;

        tracing::debug!(rules = rules.len(), "Compiled rule catalog");
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn group(&self, group: RuleGroup) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter().filter(move |rule| rule.group() == group)
    }

    /// Rules eligible under `mode`, in catalog order
    pub fn eligible(&self, mode: HumanizeMode) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| mode.allows(rule.group()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
