//! Arbitration value objects

use crate::claim::entities::ClaimId;
use crate::claim::severity::Severity;
use serde::{Deserialize, Serialize};

/// The arbiter's opinion about one existing claim
///
/// Produced in a single batch after all claims exist, consumed exactly once
/// during synthesis. An adjustment whose target does not exist is ignored
/// (arbiter and generators are independent, non-transactional producers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbitrationAdjustment {
    /// The claim this adjustment targets
    pub target_claim_id: ClaimId,
    /// Signed confidence delta, typically in [-1.0, +1.0]
    pub confidence_delta: f64,
    /// Replacement severity, if the arbiter disagrees with the original
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity_override: Option<Severity>,
    /// Justification for the adjustment
    #[serde(default)]
    pub comment: String,
}

impl ArbitrationAdjustment {
    pub fn new(target: ClaimId, confidence_delta: f64) -> Self {
        Self {
            target_claim_id: target,
            confidence_delta,
            severity_override: None,
            comment: String::new(),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity_override = Some(severity);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// Complete output of one arbitration pass
///
/// Zero adjustments is a valid verdict — it means the arbiter found no
/// disagreement worth correcting. The overall score is `None` only when
/// arbitration itself failed and the orchestrator substituted an empty
/// verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbiterVerdict {
    /// Per-claim adjustments
    pub adjustments: Vec<ArbitrationAdjustment>,
    /// Holistic content score, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<u8>,
    /// Justification for the overall score
    #[serde(default)]
    pub justification: String,
}

impl ArbiterVerdict {
    pub fn new(adjustments: Vec<ArbitrationAdjustment>, overall_score: u8) -> Self {
        Self {
            adjustments,
            overall_score: Some(overall_score.min(100)),
            justification: String::new(),
        }
    }

    /// Verdict carrying no adjustments and no score (arbitration failed)
    pub fn unavailable() -> Self {
        Self {
            adjustments: Vec::new(),
            overall_score: None,
            justification: String::new(),
        }
    }

    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.justification = justification.into();
        self
    }

    /// Whether this verdict came from a successful arbitration pass
    pub fn is_available(&self) -> bool {
        self.overall_score.is_some()
    }
}
