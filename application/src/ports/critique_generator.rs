//! Critique generator port
//!
//! The single I/O boundary of the core: everything that produces critiques,
//! decompositions, self-reviews, or arbitration verdicts sits behind this
//! trait. Use cases never perform I/O themselves, which makes them
//! deterministic under a scripted fake.

use async_trait::async_trait;
use council_domain::{
    AgentErrorKind, AgentPerspective, ArbiterVerdict, Claim, ClaimRevision, DraftClaim, TreePath,
};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a generation call
///
/// Every variant is recoverable at the point of use: callers convert a
/// failure into a zero-claim result with an error descriptor and continue.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl GeneratorError {
    /// The failure class recorded in error descriptors
    pub fn failure_class(&self) -> AgentErrorKind {
        match self {
            GeneratorError::Timeout(_) => AgentErrorKind::Timeout,
            GeneratorError::Malformed(_) => AgentErrorKind::MalformedResponse,
            GeneratorError::Provider(_) => AgentErrorKind::Provider,
            GeneratorError::Transport(_) => AgentErrorKind::Transport,
            GeneratorError::Cancelled => AgentErrorKind::Cancelled,
        }
    }
}

/// Structured hints accompanying a critique call
///
/// Carries the sub-point a decomposed branch was assigned and where in the
/// tree the call sits. Agents use the path both to tag claims and to
/// namespace claim ids, so concurrent branches never collide.
#[derive(Debug, Clone, Default)]
pub struct CritiqueContext {
    /// The sub-point this branch was assigned, if decomposed
    pub assigned_point: Option<String>,
    /// Location in the recursive decomposition
    pub tree_path: TreePath,
}

impl CritiqueContext {
    pub fn for_branch(assigned_point: impl Into<String>, tree_path: TreePath) -> Self {
        Self {
            assigned_point: Some(assigned_point.into()),
            tree_path,
        }
    }
}

/// Generator capability consumed by the council
///
/// The core does not care how this is implemented — HTTP call, local
/// model, subprocess, or scripted fake — only that it honors these shapes.
/// The decomposition result is returned as a raw JSON value because shape
/// tolerance (bare list vs. object with a known list-valued key) is the
/// reasoning tree's concern, not the adapter's.
#[async_trait]
pub trait CritiqueGenerator: Send + Sync {
    /// Produce draft claims for one perspective
    async fn critique(
        &self,
        content: &str,
        perspective: &AgentPerspective,
        context: Option<&CritiqueContext>,
    ) -> Result<Vec<DraftClaim>, GeneratorError>;

    /// Review the perspective's own claims against the content
    async fn self_critique(
        &self,
        content: &str,
        perspective: &AgentPerspective,
        claims: &[Claim],
    ) -> Result<Vec<ClaimRevision>, GeneratorError>;

    /// Decompose content into sub-points (raw value, shape checked by caller)
    async fn decompose(
        &self,
        content: &str,
        perspective: &AgentPerspective,
    ) -> Result<serde_json::Value, GeneratorError>;

    /// Arbitrate the full claim set, with a distinct adjudicator role
    async fn arbitrate(
        &self,
        content: &str,
        claims: &[Claim],
        cohort: &str,
    ) -> Result<ArbiterVerdict, GeneratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_class_mapping() {
        assert_eq!(
            GeneratorError::Timeout(Duration::from_secs(1)).failure_class(),
            AgentErrorKind::Timeout
        );
        assert_eq!(
            GeneratorError::Malformed("bad json".into()).failure_class(),
            AgentErrorKind::MalformedResponse
        );
        assert_eq!(
            GeneratorError::Provider("rate limited".into()).failure_class(),
            AgentErrorKind::Provider
        );
    }
}
