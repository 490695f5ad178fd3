//! Substitution rules
//!
//! A rule pairs a case-insensitive pattern with a literal replacement. Rules
//! are compiled once and shared read-only between requests.

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::Result;

/// Which part of the catalog a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleGroup {
    /// Formal transitions and hedges rewritten to casual phrasing
    Lexical,
    /// Negated verb forms rewritten to contractions
    Contraction,
}

impl RuleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Contraction => "contraction",
        }
    }
}

impl fmt::Display for RuleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled pattern/replacement pair
#[derive(Debug, Clone)]
pub struct Rule {
    group: RuleGroup,
    phrase: &'static str,
    replacement: &'static str,
    pattern: Regex,
}

impl Rule {
    /// Build a rule matching `phrase` ignoring case.
    ///
    /// Every phrase is anchored on a word boundary at its start. Contraction
    /// phrases are anchored at their end as well, so `"is not"` never eats
    /// the front of `"is nothing"`. Case folding and word boundaries are
    /// ASCII-only: `é` is not a word character and `K` (U+212A) is not `k`.
    pub fn phrase(group: RuleGroup, phrase: &'static str, replacement: &'static str) -> Result<Self> {
        let trailing = match group {
            RuleGroup::Contraction => r"\b",
            RuleGroup::Lexical => "",
        };
        let pattern = Regex::new(&format!(r"(?i-u)\b{}{}", regex::escape(phrase), trailing))?;

        Ok(Self {
            group,
            phrase,
            replacement,
            pattern,
        })
    }

    pub fn group(&self) -> RuleGroup {
        self.group
    }

    /// The phrase this rule rewrites, as written in the catalog
    pub fn source(&self) -> &'static str {
        self.phrase
    }

    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Number of non-overlapping matches in `text`
    pub fn count_matches(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }

    /// Replace every match in `text`. The replacement is inserted verbatim.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, NoExpand(self.replacement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_rule_is_case_insensitive_and_global() {
        let rule = Rule::phrase(RuleGroup::Contraction, "do not", "don't").unwrap();
        assert_eq!(
            rule.apply("I do not know. DO NOT ask."),
            "I don't know. don't ask."
        );
        assert_eq!(rule.count_matches("do not, Do Not, dO nOt"), 3);
    }

    #[test]
    fn test_word_boundaries() {
        let rule = Rule::phrase(RuleGroup::Contraction, "is not", "isn't").unwrap();
        // "this not" must not match inside "this"
        assert_eq!(rule.apply("this notion is not new"), "this notion isn't new");
        assert_eq!(rule.apply("it is nothing"), "it is nothing");
    }

    #[test]
    fn test_trailing_punctuation_phrase() {
        let rule = Rule::phrase(RuleGroup::Lexical, "However,", "But,").unwrap();
        assert_eq!(rule.apply("however, it works"), "But, it works");
        assert_eq!(rule.apply("Whatever, it works"), "Whatever, it works");
    }

    #[test]
    fn test_replacement_is_literal() {
        let rule = Rule::phrase(RuleGroup::Lexical, "price", "$1 cost").unwrap();
        assert_eq!(rule.apply("the price"), "the $1 cost");
    }

    #[test]
    fn test_no_match_borrows() {
        let rule = Rule::phrase(RuleGroup::Lexical, "Moreover,", "Plus,").unwrap();
        assert!(matches!(rule.apply("nothing here"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_matching_is_ascii_only() {
        let rule = Rule::phrase(RuleGroup::Contraction, "is not", "isn't").unwrap();
        // Long s (U+017F) does not fold to "s"
        assert_eq!(rule.apply("it i\u{17F} not"), "it i\u{17F} not");
        // Non-ASCII letters are not word characters
        assert_eq!(rule.apply("\u{E9}is not"), "\u{E9}isn't");

        let rule = Rule::phrase(RuleGroup::Lexical, "Look,", "See,").unwrap();
        assert_eq!(rule.apply("Loo\u{212A}, there"), "Loo\u{212A}, there");
        assert_eq!(rule.apply("LOOK, there"), "See, there");
    }
}
