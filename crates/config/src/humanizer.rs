//! Rewrite pipeline settings

use humanizer_core::HumanizeMode;
use serde::{Deserialize, Serialize};

use crate::constants::{latency, limits, probabilities};
use crate::ConfigError;

/// Settings for the humanize endpoint and its pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanizerSettings {
    /// Maximum input length in characters
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Probability that each catalog rule is applied
    #[serde(default = "default_rule_probability")]
    pub rule_probability: f64,

    /// Probability that each sentence receives a filler phrase
    #[serde(default = "default_filler_probability")]
    pub filler_probability: f64,

    /// Mode used when a request omits `mode` or sends an unknown value
    #[serde(default)]
    pub default_mode: HumanizeMode,

    /// Simulated processing latency
    #[serde(default)]
    pub latency: LatencySettings,
}

/// Artificial delay applied before the response is returned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencySettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_min_ms")]
    pub min_ms: u64,

    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

fn default_max_input_chars() -> usize {
    limits::MAX_INPUT_CHARS
}
fn default_rule_probability() -> f64 {
    probabilities::RULE_APPLICATION
}
fn default_filler_probability() -> f64 {
    probabilities::FILLER_INJECTION
}
fn default_min_ms() -> u64 {
    latency::MIN_MS
}
fn default_max_ms() -> u64 {
    latency::MAX_MS
}
fn default_true() -> bool {
    true
}

impl Default for HumanizerSettings {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            rule_probability: default_rule_probability(),
            filler_probability: default_filler_probability(),
            default_mode: HumanizeMode::default(),
            latency: LatencySettings::default(),
        }
    }
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            min_ms: default_min_ms(),
            max_ms: default_max_ms(),
        }
    }
}

impl LatencySettings {
    /// No delay at all; used by tests and local tooling
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl HumanizerSettings {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "humanizer.max_input_chars".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        for (field, value) in [
            ("humanizer.rule_probability", self.rule_probability),
            ("humanizer.filler_probability", self.filler_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("Must be between 0.0 and 1.0, got {}", value),
                });
            }
        }

        if self.latency.min_ms > self.latency.max_ms {
            return Err(ConfigError::InvalidValue {
                field: "humanizer.latency".to_string(),
                message: format!(
                    "min_ms ({}) cannot exceed max_ms ({})",
                    self.latency.min_ms, self.latency.max_ms
                ),
            });
        }

        Ok(())
    }
}
