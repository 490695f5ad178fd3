//! Per-request rule ordering, selection and application

use humanizer_core::{HumanizeMode, RandomSource, Rule};
use std::borrow::Cow;

use super::RuleCatalog;

/// Fisher-Yates shuffle into a new list; the input is left untouched.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// drawn index at or below it.
pub fn shuffle<'a>(rules: &[&'a Rule], rng: &mut dyn RandomSource) -> Vec<&'a Rule> {
    let mut shuffled = rules.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.pick_index(i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Chooses which rules run for one request, and in what order
#[derive(Debug, Clone, Copy)]
pub struct RuleSelector {
    probability: f64,
}

impl RuleSelector {
    /// `probability` is the independent inclusion chance of each rule
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Shuffle the rules eligible under `mode`, then keep each with the
    /// configured probability. Order of the result is application order.
    pub fn select<'a>(
        &self,
        catalog: &'a RuleCatalog,
        mode: HumanizeMode,
        rng: &mut dyn RandomSource,
    ) -> Vec<&'a Rule> {
        let ordered = shuffle(&catalog.eligible(mode), rng);
        ordered
            .into_iter()
            .filter(|_| rng.chance(self.probability))
            .collect()
    }
}

/// Outcome of a rule pass
#[derive(Debug, Clone)]
pub struct AppliedRules {
    pub text: String,
    /// Rules that ran
    pub selected: usize,
    /// Source phrases of the rules that changed the text, in application order
    pub matched: Vec<&'static str>,
}

/// Applies rules one after another to the same evolving text
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleApplier;

impl RuleApplier {
    pub fn new() -> Self {
        Self
    }

    /// Later rules see the output of earlier ones.
    pub fn apply(&self, text: &str, rules: &[&Rule]) -> AppliedRules {
        let mut working = text.to_string();
        let mut matched = Vec::new();

        for rule in rules {
            if let Cow::Owned(rewritten) = rule.apply(&working) {
                tracing::trace!(rule = rule.source(), group = %rule.group(), "Rule applied");
                matched.push(rule.source());
                working = rewritten;
            }
        }

        AppliedRules {
            text: working,
            selected: rules.len(),
            matched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, StdRandom};
    use crate::rules::catalog;
    use humanizer_core::RuleGroup;

    fn sources(rules: &[&Rule]) -> Vec<&'static str> {
        rules.iter().map(|r| r.source()).collect()
    }

    #[test]
    fn test_shuffle_identity_when_draws_pick_last() {
        let eligible = catalog().eligible(HumanizeMode::Standard);
        let mut rng = ScriptedRandom::constant(0.999);
        let shuffled = shuffle(&eligible, &mut rng);
        assert_eq!(sources(&shuffled), sources(&eligible));
    }

    #[test]
    fn test_shuffle_is_permutation_and_leaves_input() {
        let eligible = catalog().eligible(HumanizeMode::Standard);
        let before = sources(&eligible);
        let mut rng = StdRandom::seeded(7);
        let shuffled = shuffle(&eligible, &mut rng);

        assert_eq!(sources(&eligible), before);
        let mut a = sources(&shuffled);
        let mut b = before.clone();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_draw_zero_rotates() {
        // Always swapping with index 0 moves the first element to the end
        let eligible = catalog().eligible(HumanizeMode::Contractions);
        let mut rng = ScriptedRandom::constant(0.0);
        let shuffled = shuffle(&eligible, &mut rng);
        assert_eq!(shuffled.len(), eligible.len());
        assert_eq!(shuffled.last().unwrap().source(), "do not");
    }

    #[test]
    fn test_shuffle_small_inputs() {
        let mut rng = StdRandom::seeded(1);
        assert!(shuffle(&[], &mut rng).is_empty());
        let one = catalog().eligible(HumanizeMode::Contractions)[..1].to_vec();
        assert_eq!(sources(&shuffle(&one, &mut rng)), vec!["do not"]);
    }

    #[test]
    fn test_select_probability_bounds() {
        let mut rng = StdRandom::seeded(3);
        assert_eq!(
            RuleSelector::new(1.0)
                .select(catalog(), HumanizeMode::Standard, &mut rng)
                .len(),
            33
        );
        assert!(RuleSelector::new(0.0)
            .select(catalog(), HumanizeMode::Standard, &mut rng)
            .is_empty());
    }

    #[test]
    fn test_select_respects_mode() {
        let mut rng = StdRandom::seeded(11);
        let selected = RuleSelector::new(1.0).select(catalog(), HumanizeMode::Contractions, &mut rng);
        assert_eq!(selected.len(), 13);
        assert!(selected.iter().all(|r| r.group() == RuleGroup::Contraction));
    }

    #[test]
    fn test_select_is_deterministic_for_seed() {
        let selector = RuleSelector::new(0.7);
        let a = selector.select(catalog(), HumanizeMode::Standard, &mut StdRandom::seeded(42));
        let b = selector.select(catalog(), HumanizeMode::Standard, &mut StdRandom::seeded(42));
        assert_eq!(sources(&a), sources(&b));
    }

    #[test]
    fn test_apply_contraction() {
        let rules = catalog().eligible(HumanizeMode::Contractions);
        let applied = RuleApplier::new().apply("I do not think this is correct.", &rules);
        assert_eq!(applied.text, "I don't think this is correct.");
        assert_eq!(applied.matched, vec!["do not"]);
        assert_eq!(applied.selected, 13);
    }

    #[test]
    fn test_apply_no_match_is_noop() {
        let rules = catalog().eligible(HumanizeMode::Standard);
        let applied = RuleApplier::new().apply("Plain words only", &rules);
        assert_eq!(applied.text, "Plain words only");
        assert!(applied.matched.is_empty());
    }

    #[test]
    fn test_apply_independent_rules_in_sequence() {
        let all = catalog().eligible(HumanizeMode::Standard);
        let hedge = *all
            .iter()
            .find(|r| r.source() == "It is important to note that")
            .unwrap();
        let it_is = *all
            .iter()
            .find(|r| r.source() == "It is beneficial to")
            .unwrap();

        let text = "It is important to note that it is beneficial to rest.";
        let applied = RuleApplier::new().apply(text, &[hedge, it_is]);
        assert_eq!(applied.text, "Worth mentioning that It helps to rest.");
        assert_eq!(applied.matched.len(), 2);
    }

    #[test]
    fn test_later_rule_sees_earlier_replacement() {
        let never = Rule::phrase(RuleGroup::Lexical, "never", "do not").unwrap();
        let do_not = Rule::phrase(RuleGroup::Contraction, "do not", "don't").unwrap();
        let text = "I never agree.";

        let applied = RuleApplier::new().apply(text, &[&never, &do_not]);
        assert_eq!(applied.text, "I don't agree.");
        assert_eq!(applied.matched, vec!["never", "do not"]);

        let applied = RuleApplier::new().apply(text, &[&do_not, &never]);
        assert_eq!(applied.text, "I do not agree.");
        assert_eq!(applied.matched, vec!["never"]);
    }
}
