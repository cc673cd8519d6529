//! Council execution configuration

use council_domain::SynthesisOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for one council run
///
/// `max_depth` is the sole termination guarantee for tree recursion: there
/// is no other cycle protection, so the default stays conservative.
/// `confidence_threshold` is a pruning hint carried through for callers —
/// the core never drops claims below it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CouncilConfig {
    /// Decomposition depth ceiling (0 = flat, never decompose)
    pub max_depth: usize,
    /// Whether agents run a self-critique pass over their own claims
    pub self_critique: bool,
    /// Advisory floor for claim confidence; callers may filter below it
    pub confidence_threshold: f64,
    /// Display floor applied by report renderers
    pub synthesis_confidence_threshold: f64,
    /// Token-similarity threshold for duplicate detection
    pub similarity_threshold: f64,
    /// Per-generation-call timeout, seconds
    pub generator_timeout_secs: u64,
}

impl Default for CouncilConfig {
    fn default() -> Self {
        Self {
            max_depth: 1,
            self_critique: true,
            confidence_threshold: 0.0,
            synthesis_confidence_threshold: 0.0,
            similarity_threshold: 0.82,
            generator_timeout_secs: 120,
        }
    }
}

impl CouncilConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn without_self_critique(mut self) -> Self {
        self.self_critique = false;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_generator_timeout(mut self, timeout: Duration) -> Self {
        self.generator_timeout_secs = timeout.as_secs();
        self
    }

    /// Per-call generator timeout as a `Duration`
    pub fn generator_timeout(&self) -> Duration {
        Duration::from_secs(self.generator_timeout_secs)
    }

    /// Synthesis knobs derived from this config
    pub fn synthesis_options(&self) -> SynthesisOptions {
        SynthesisOptions {
            similarity_threshold: self.similarity_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_conservative() {
        let config = CouncilConfig::default();
        assert!(config.max_depth <= 2);
        assert!(config.self_critique);
        assert_eq!(config.generator_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_builders() {
        let config = CouncilConfig::default()
            .with_max_depth(0)
            .without_self_critique();
        assert_eq!(config.max_depth, 0);
        assert!(!config.self_critique);
    }
}
