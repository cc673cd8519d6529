//! Synthesis report types

use crate::claim::entities::Claim;
use crate::claim::severity::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A claim with its post-arbitration overlay
///
/// The original [`Claim`] is carried unmodified for audit; `confidence`,
/// `severity`, and `area` are the effective values after adjustments and
/// label resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedClaim {
    /// The original claim as produced by its agent
    pub claim: Claim,
    /// Effective confidence after arbitration deltas (clamped to [0, 1])
    pub confidence: f64,
    /// Effective severity after any arbiter override
    pub severity: Severity,
    /// Resolved area label (always resolvable, never silently "unknown")
    pub area: String,
}

impl RankedClaim {
    /// Wrap a claim with its own values as the initial overlay
    pub fn from_claim(claim: Claim) -> Self {
        let confidence = claim.confidence;
        let severity = claim.severity;
        Self {
            claim,
            confidence,
            severity,
            area: String::new(),
        }
    }
}

/// Final output of a council run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisReport {
    /// Deduplicated claims, sorted by descending effective confidence, then
    /// severity rank, then id
    pub ranked_claims: Vec<RankedClaim>,
    /// Arbiter's holistic score (0-100), absent when arbitration failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arbiter_overall_score: Option<u8>,
    /// Arbiter's justification, absent when arbitration failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arbiter_score_justification: Option<String>,
    /// Surviving claim count per perspective (zero entries included)
    pub perspective_summary: BTreeMap<String, usize>,
    /// How many near-identical claims were dropped during deduplication
    pub dropped_duplicates: usize,
}

impl SynthesisReport {
    /// Total surviving claims
    pub fn claim_count(&self) -> usize {
        self.ranked_claims.len()
    }

    /// Perspectives that contributed zero surviving claims
    pub fn silent_perspectives(&self) -> impl Iterator<Item = &str> {
        self.perspective_summary
            .iter()
            .filter(|&(_, &count)| count == 0)
            .map(|(id, _)| id.as_str())
    }
}
