//! Rewrite modes, scores and results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, RuleGroup};

/// Which rule groups a request is allowed to draw from
///
/// Reserved for future aggressiveness levels. Every mode keeps the standard
/// probabilities and filler injection; modes only narrow the eligible groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HumanizeMode {
    /// All rules, standard probabilities
    #[default]
    Standard,
    /// Lexical substitutions only
    Lexical,
    /// Contractions only
    Contractions,
}

impl HumanizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Lexical => "lexical",
            Self::Contractions => "contractions",
        }
    }

    /// Whether rules of `group` may be applied in this mode
    pub fn allows(&self, group: RuleGroup) -> bool {
        match self {
            Self::Standard => true,
            Self::Lexical => group == RuleGroup::Lexical,
            Self::Contractions => group == RuleGroup::Contraction,
        }
    }
}

impl fmt::Display for HumanizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HumanizeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "standard" => Ok(Self::Standard),
            "lexical" => Ok(Self::Lexical),
            "contractions" | "contraction" => Ok(Self::Contractions),
            other => Err(Error::InvalidInput(format!("Unknown mode: {}", other))),
        }
    }
}

/// Coarse label derived from the confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BypassTier {
    High,
    Medium,
    Low,
}

impl BypassTier {
    /// High above 80, Medium above 60, Low otherwise
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 80.0 {
            Self::High
        } else if confidence > 60.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for BypassTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a [`ConfidenceScorer`](crate::ConfidenceScorer)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceScore {
    /// Rounded score, always within the scorer's clamp bounds
    pub confidence: u8,
    pub tier: BypassTier,
    /// Words of the original counted as changed
    pub changed_words: usize,
    /// Words in the original
    pub total_words: usize,
}

impl ConfidenceScore {
    /// Fraction of original words counted as changed
    pub fn changed_fraction(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.changed_words as f64 / self.total_words as f64
        }
    }
}

/// Result of one humanize invocation, ready for the response assembler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationResult {
    pub humanized_text: String,
    pub original_length: usize,
    pub humanized_length: usize,
    pub confidence: u8,
    #[serde(rename = "detectionBypass")]
    pub bypass_tier: BypassTier,
    #[serde(rename = "processingTime")]
    pub processing_time_ms: u64,
}

impl TransformationResult {
    /// Assemble a result. Lengths are counted in characters.
    pub fn new(
        original: &str,
        humanized_text: String,
        score: &ConfidenceScore,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            original_length: original.chars().count(),
            humanized_length: humanized_text.chars().count(),
            humanized_text,
            confidence: score.confidence,
            bypass_tier: score.tier,
            processing_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("standard".parse::<HumanizeMode>().unwrap(), HumanizeMode::Standard);
        assert_eq!("Lexical".parse::<HumanizeMode>().unwrap(), HumanizeMode::Lexical);
        assert_eq!(
            "contractions".parse::<HumanizeMode>().unwrap(),
            HumanizeMode::Contractions
        );
        assert!("aggressive".parse::<HumanizeMode>().is_err());
    }

    #[test]
    fn test_mode_allows() {
        assert!(HumanizeMode::Standard.allows(RuleGroup::Lexical));
        assert!(HumanizeMode::Standard.allows(RuleGroup::Contraction));
        assert!(!HumanizeMode::Lexical.allows(RuleGroup::Contraction));
        assert!(!HumanizeMode::Contractions.allows(RuleGroup::Lexical));
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(BypassTier::from_confidence(95.0), BypassTier::High);
        assert_eq!(BypassTier::from_confidence(80.5), BypassTier::High);
        assert_eq!(BypassTier::from_confidence(80.0), BypassTier::Medium);
        assert_eq!(BypassTier::from_confidence(60.0), BypassTier::Low);
    }

    #[test]
    fn test_result_wire_format() {
        let score = ConfidenceScore {
            confidence: 88,
            tier: BypassTier::High,
            changed_words: 1,
            total_words: 2,
        };
        let result = TransformationResult::new("héllo there", "héllo, there".to_string(), &score, 1500);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["humanizedText"], "héllo, there");
        assert_eq!(json["originalLength"], 11);
        assert_eq!(json["humanizedLength"], 12);
        assert_eq!(json["confidence"], 88);
        assert_eq!(json["detectionBypass"], "High");
        assert_eq!(json["processingTime"], 1500);
    }
}
