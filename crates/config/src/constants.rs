//! Centralized constants for the humanizer
//!
//! Single source of truth for default values used across the workspace.

/// Request limits
pub mod limits {
    /// Maximum accepted input length, in characters
    pub const MAX_INPUT_CHARS: usize = 5000;
}

/// Rewrite probabilities
pub mod probabilities {
    /// Chance that any single catalog rule is applied
    pub const RULE_APPLICATION: f64 = 0.7;

    /// Chance that a sentence gets a filler phrase
    pub const FILLER_INJECTION: f64 = 0.3;
}

/// Simulated processing latency
pub mod latency {
    pub const MIN_MS: u64 = 1000;
    pub const MAX_MS: u64 = 3000;
}

/// Server defaults
pub mod server {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Origin allowed when CORS is enabled without configured origins
    pub const FALLBACK_CORS_ORIGIN: &str = "http://localhost:3000";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_range() {
        assert!(latency::MIN_MS <= latency::MAX_MS);
    }

    #[test]
    fn test_probabilities_in_range() {
        assert!((0.0..=1.0).contains(&probabilities::RULE_APPLICATION));
        assert!((0.0..=1.0).contains(&probabilities::FILLER_INJECTION));
    }
}
