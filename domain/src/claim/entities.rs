//! Claim entities and value objects
//!
//! - [`ClaimId`] - Namespaced identifier, unique within a council run
//! - [`TreePath`] - Where in the recursive decomposition a claim was produced
//! - [`Claim`] - One immutable critique assertion
//! - [`DraftClaim`] - Generator payload before the agent stamps identity
//! - [`ClaimRevision`] - One self-critique revision proposal

use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// Identifier for a claim, unique within a single council run
///
/// Ids are namespaced per perspective (`<perspective_id>-c<counter>`), so
/// concurrent agents can assign ids without a shared counter. The `Ord`
/// impl (plain string order) is used as the final determinism tiebreak in
/// synthesis.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(String);

impl ClaimId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build a namespaced id from a perspective and a local counter
    pub fn namespaced(perspective_id: &str, counter: usize) -> Self {
        Self(format!("{}-c{}", perspective_id, counter))
    }

    /// Build a namespaced id scoped to a decomposition branch
    ///
    /// Agents running on different sub-points of the same perspective each
    /// count from zero; the tree path keeps their ids distinct without any
    /// shared counter.
    pub fn namespaced_at(perspective_id: &str, path: &TreePath, counter: usize) -> Self {
        if path.is_root() {
            Self::namespaced(perspective_id, counter)
        } else {
            Self(format!("{}-{}-c{}", perspective_id, path, counter))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClaimId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClaimId {
    fn from(s: &str) -> Self {
        ClaimId::new(s)
    }
}

/// Ordered list of sub-point indices locating a claim in the decomposition
///
/// Empty path = produced at the root (no decomposition). Lexicographic
/// ordering over the index vector restores depth-first decomposition order
/// after concurrent branches complete in arbitrary order.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreePath(Vec<usize>);

impl TreePath {
    /// The root path (no decomposition)
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Extend this path with a child sub-point index
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl std::fmt::Display for TreePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}", joined)
    }
}

impl From<Vec<usize>> for TreePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

/// One critique assertion (immutable once created)
///
/// Created by a reasoning agent (or synthetically by the arbiter) and never
/// mutated afterwards. Adjustments produce an overlay
/// ([`crate::synthesis::report::RankedClaim`]) rather than touching the
/// original, preserving it for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Stable identifier, unique within a council run
    pub id: ClaimId,
    /// The perspective that produced this claim
    pub perspective_id: String,
    /// The assertion itself
    pub claim_text: String,
    /// Supporting evidence
    pub evidence_text: String,
    /// Confidence in [0.0, 1.0] as emitted by the generator (clamped on entry)
    pub confidence: f64,
    /// Severity if the claim holds
    pub severity: Severity,
    /// What should be done about it
    pub recommendation: String,
    /// Acknowledged counterpoint, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concession: Option<String>,
    /// Where in the decomposition this claim was produced
    #[serde(default)]
    pub tree_path: TreePath,
}

impl Claim {
    /// Create a claim, clamping confidence into [0.0, 1.0]
    pub fn new(
        id: ClaimId,
        perspective_id: impl Into<String>,
        claim_text: impl Into<String>,
        confidence: f64,
        severity: Severity,
    ) -> Self {
        Self {
            id,
            perspective_id: perspective_id.into(),
            claim_text: claim_text.into(),
            evidence_text: String::new(),
            confidence: confidence.clamp(0.0, 1.0),
            severity,
            recommendation: String::new(),
            concession: None,
            tree_path: TreePath::root(),
        }
    }

    /// Stamp identity onto a generator draft
    ///
    /// Confidence is clamped and the draft's severity label parsed leniently;
    /// a raw out-of-range value never propagates past this constructor.
    pub fn from_draft(
        draft: DraftClaim,
        id: ClaimId,
        perspective_id: impl Into<String>,
        tree_path: TreePath,
    ) -> Self {
        Self {
            id,
            perspective_id: perspective_id.into(),
            claim_text: draft.claim_text,
            evidence_text: draft.evidence_text,
            confidence: draft.confidence.clamp(0.0, 1.0),
            severity: Severity::parse_lenient(&draft.severity),
            recommendation: draft.recommendation,
            concession: draft.concession.filter(|c| !c.trim().is_empty() && c != "None"),
            tree_path,
        }
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence_text = evidence.into();
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = recommendation.into();
        self
    }

    pub fn with_concession(mut self, concession: impl Into<String>) -> Self {
        self.concession = Some(concession.into());
        self
    }

    pub fn with_tree_path(mut self, path: TreePath) -> Self {
        self.tree_path = path;
        self
    }
}

/// A claim as emitted by a generator, before identity is assigned
///
/// Field defaults are lenient: generators frequently omit optional fields,
/// and a missing confidence or severity should not discard the claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftClaim {
    pub claim_text: String,
    #[serde(default)]
    pub evidence_text: String,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    #[serde(default = "default_severity")]
    pub severity: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub concession: Option<String>,
}

fn default_confidence() -> f64 {
    0.5
}

fn default_severity() -> String {
    "medium".to_string()
}

impl DraftClaim {
    pub fn new(claim_text: impl Into<String>) -> Self {
        Self {
            claim_text: claim_text.into(),
            evidence_text: String::new(),
            confidence: default_confidence(),
            severity: default_severity(),
            recommendation: String::new(),
            concession: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = severity.into();
        self
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence_text = evidence.into();
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = recommendation.into();
        self
    }
}

/// One self-critique revision proposal for an existing claim
///
/// Whether a revision is *accepted* is the reasoning agent's decision; the
/// invariant is that confidence may only increase when `new_evidence` is
/// supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRevision {
    /// The claim this revision targets
    pub target_claim_id: ClaimId,
    /// Revised confidence, if the perspective changed its mind
    #[serde(default)]
    pub revised_confidence: Option<f64>,
    /// Revised claim text, if rephrased
    #[serde(default)]
    pub revised_text: Option<String>,
    /// New evidence justifying a confidence increase
    #[serde(default)]
    pub new_evidence: Option<String>,
}

impl ClaimRevision {
    pub fn new(target: ClaimId) -> Self {
        Self {
            target_claim_id: target,
            revised_confidence: None,
            revised_text: None,
            new_evidence: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.revised_confidence = Some(confidence);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.revised_text = Some(text.into());
        self
    }

    pub fn with_new_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.new_evidence = Some(evidence.into());
        self
    }

    /// Whether this revision carries non-empty new evidence
    pub fn has_new_evidence(&self) -> bool {
        self.new_evidence
            .as_deref()
            .is_some_and(|e| !e.trim().is_empty())
    }
}
