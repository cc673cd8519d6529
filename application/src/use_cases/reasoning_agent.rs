//! Reasoning agent use case
//!
//! Drives one perspective's lifecycle: initial critique generation, an
//! optional self-critique pass, and conversion of any generator failure
//! into data. The agent performs no I/O of its own — everything goes
//! through the injected [`CritiqueGenerator`].

use crate::ports::critique_generator::{CritiqueContext, CritiqueGenerator, GeneratorError};
use council_domain::{AgentError, AgentPerspective, AgentResult, Claim, ClaimId, ClaimRevision};
use std::sync::Arc;
use tracing::{debug, warn};

/// Lifecycle state of a reasoning agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentPhase {
    /// Constructed, not yet run
    Pending,
    /// Initial critique generation in flight
    Generating,
    /// Reviewing its own claim set
    SelfCritiquing,
    /// Finished with a usable result
    Done,
    /// Generation failed; the result carries the error descriptor
    Failed,
}

/// One perspective's critique lifecycle
///
/// `run` never returns an error: an unrecoverable generator failure yields
/// a zero-claim [`AgentResult`] with a populated error list, so the
/// orchestrator can continue with the remaining perspectives.
pub struct ReasoningAgent<G: CritiqueGenerator> {
    generator: Arc<G>,
    self_critique: bool,
    phase: AgentPhase,
}

impl<G: CritiqueGenerator> ReasoningAgent<G> {
    pub fn new(generator: Arc<G>, self_critique: bool) -> Self {
        Self {
            generator,
            self_critique,
            phase: AgentPhase::Pending,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> AgentPhase {
        self.phase
    }

    /// Run the full lifecycle for one perspective
    pub async fn run(
        &mut self,
        content: &str,
        perspective: &AgentPerspective,
        context: Option<&CritiqueContext>,
    ) -> AgentResult {
        self.phase = AgentPhase::Generating;
        let tree_path = context.map(|c| c.tree_path.clone()).unwrap_or_default();

        let drafts = match self.generator.critique(content, perspective, context).await {
            Ok(drafts) => drafts,
            Err(e) => {
                warn!(
                    perspective = %perspective.id,
                    class = %e.failure_class(),
                    "critique generation failed: {}",
                    e
                );
                self.phase = AgentPhase::Failed;
                return AgentResult::failed(
                    &perspective.id,
                    AgentError::new(&perspective.id, e.failure_class(), e.to_string()),
                );
            }
        };

        let mut claims: Vec<Claim> = drafts
            .into_iter()
            .enumerate()
            .map(|(i, draft)| {
                Claim::from_draft(
                    draft,
                    ClaimId::namespaced_at(&perspective.id, &tree_path, i),
                    &perspective.id,
                    tree_path.clone(),
                )
            })
            .collect();

        debug!(
            perspective = %perspective.id,
            count = claims.len(),
            path = %tree_path,
            "critique generated"
        );

        let mut errors = Vec::new();
        let mut self_critique_applied = false;

        if self.self_critique && !claims.is_empty() {
            self.phase = AgentPhase::SelfCritiquing;
            match self.generator.self_critique(content, perspective, &claims).await {
                Ok(revisions) => {
                    claims = Self::apply_revisions(claims, &revisions);
                    self_critique_applied = true;
                }
                Err(e) => {
                    // keep the original claims; self-critique is an enhancement
                    warn!(
                        perspective = %perspective.id,
                        "self-critique failed, keeping original claims: {}",
                        e
                    );
                    errors.push(AgentError::new(
                        &perspective.id,
                        e.failure_class(),
                        format!("self-critique: {}", e),
                    ));
                }
            }
        }

        self.phase = AgentPhase::Done;
        AgentResult {
            perspective_id: perspective.id.clone(),
            claims,
            self_critique_applied,
            errors,
        }
    }

    fn apply_revisions(claims: Vec<Claim>, revisions: &[ClaimRevision]) -> Vec<Claim> {
        claims
            .into_iter()
            .map(|claim| {
                match revisions.iter().find(|r| r.target_claim_id == claim.id) {
                    Some(revision) => Self::accept_revision(claim, revision),
                    None => claim,
                }
            })
            .collect()
    }

    /// Apply one revision under the no-silent-inflation rule
    ///
    /// Confidence may drop freely; it may rise above the original only when
    /// the revision carries new evidence. Revised text is applied either way.
    fn accept_revision(mut claim: Claim, revision: &ClaimRevision) -> Claim {
        let original_confidence = claim.confidence;

        if let Some(text) = &revision.revised_text {
            claim.claim_text = text.clone();
        }

        if revision.has_new_evidence() {
            let evidence = revision.new_evidence.as_deref().unwrap_or_default();
            if claim.evidence_text.is_empty() {
                claim.evidence_text = evidence.to_string();
            } else {
                claim.evidence_text = format!("{}\n{}", claim.evidence_text, evidence);
            }
        }

        if let Some(confidence) = revision.revised_confidence {
            let confidence = confidence.clamp(0.0, 1.0);
            if confidence <= original_confidence || revision.has_new_evidence() {
                claim.confidence = confidence;
            } else {
                debug!(
                    claim = %claim.id,
                    "confidence increase without new evidence rejected"
                );
            }
        }

        claim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use council_domain::{ArbiterVerdict, DraftClaim, Severity, TreePath};
    use std::time::Duration;

    /// Scripted fake: fixed drafts, optional revisions, optional failure.
    struct FakeGenerator {
        drafts: Vec<DraftClaim>,
        revisions: Vec<ClaimRevision>,
        fail_critique: bool,
        fail_self_critique: bool,
    }

    impl FakeGenerator {
        fn with_drafts(drafts: Vec<DraftClaim>) -> Self {
            Self {
                drafts,
                revisions: Vec::new(),
                fail_critique: false,
                fail_self_critique: false,
            }
        }
    }

    #[async_trait]
    impl CritiqueGenerator for FakeGenerator {
        async fn critique(
            &self,
            _content: &str,
            _perspective: &AgentPerspective,
            _context: Option<&CritiqueContext>,
        ) -> Result<Vec<DraftClaim>, GeneratorError> {
            if self.fail_critique {
                Err(GeneratorError::Timeout(Duration::from_secs(1)))
            } else {
                Ok(self.drafts.clone())
            }
        }

        async fn self_critique(
            &self,
            _content: &str,
            _perspective: &AgentPerspective,
            _claims: &[Claim],
        ) -> Result<Vec<ClaimRevision>, GeneratorError> {
            if self.fail_self_critique {
                Err(GeneratorError::Provider("boom".into()))
            } else {
                Ok(self.revisions.clone())
            }
        }

        async fn decompose(
            &self,
            _content: &str,
            _perspective: &AgentPerspective,
        ) -> Result<serde_json::Value, GeneratorError> {
            Ok(serde_json::json!([]))
        }

        async fn arbitrate(
            &self,
            _content: &str,
            _claims: &[Claim],
            _cohort: &str,
        ) -> Result<ArbiterVerdict, GeneratorError> {
            Ok(ArbiterVerdict::new(vec![], 50))
        }
    }

    fn perspective() -> AgentPerspective {
        AgentPerspective::new("logician", "The Logician", "Logical Rigor", "...")
    }

    #[tokio::test]
    async fn test_happy_path_assigns_namespaced_ids() {
        let generator = Arc::new(FakeGenerator::with_drafts(vec![
            DraftClaim::new("first").with_confidence(0.6),
            DraftClaim::new("second").with_confidence(0.4),
        ]));
        let mut agent = ReasoningAgent::new(generator, false);

        let result = agent.run("content", &perspective(), None).await;

        assert_eq!(agent.phase(), AgentPhase::Done);
        assert_eq!(result.claims.len(), 2);
        assert_eq!(result.claims[0].id, ClaimId::new("logician-c0"));
        assert_eq!(result.claims[1].id, ClaimId::new("logician-c1"));
        assert!(!result.self_critique_applied);
    }

    #[tokio::test]
    async fn test_failure_yields_data_not_error() {
        let mut generator = FakeGenerator::with_drafts(vec![]);
        generator.fail_critique = true;
        let mut agent = ReasoningAgent::new(Arc::new(generator), true);

        let result = agent.run("content", &perspective(), None).await;

        assert_eq!(agent.phase(), AgentPhase::Failed);
        assert!(result.claims.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].perspective_id, "logician");
    }

    #[tokio::test]
    async fn test_self_critique_lowers_confidence() {
        let mut generator =
            FakeGenerator::with_drafts(vec![DraftClaim::new("claim").with_confidence(0.8)]);
        generator.revisions =
            vec![ClaimRevision::new(ClaimId::new("logician-c0")).with_confidence(0.5)];
        let mut agent = ReasoningAgent::new(Arc::new(generator), true);

        let result = agent.run("content", &perspective(), None).await;

        assert!(result.self_critique_applied);
        assert_eq!(result.claims[0].confidence, 0.5);
    }

    #[tokio::test]
    async fn test_confidence_increase_without_evidence_rejected() {
        let mut generator =
            FakeGenerator::with_drafts(vec![DraftClaim::new("claim").with_confidence(0.5)]);
        generator.revisions =
            vec![ClaimRevision::new(ClaimId::new("logician-c0")).with_confidence(0.9)];
        let mut agent = ReasoningAgent::new(Arc::new(generator), true);

        let result = agent.run("content", &perspective(), None).await;

        // inflation without new evidence is pinned at the original
        assert_eq!(result.claims[0].confidence, 0.5);
    }

    #[tokio::test]
    async fn test_confidence_increase_with_evidence_accepted() {
        let mut generator =
            FakeGenerator::with_drafts(vec![DraftClaim::new("claim").with_confidence(0.5)]);
        generator.revisions = vec![
            ClaimRevision::new(ClaimId::new("logician-c0"))
                .with_confidence(0.9)
                .with_new_evidence("section 3 contradicts section 1"),
        ];
        let mut agent = ReasoningAgent::new(Arc::new(generator), true);

        let result = agent.run("content", &perspective(), None).await;

        assert_eq!(result.claims[0].confidence, 0.9);
        assert!(result.claims[0].evidence_text.contains("section 3"));
    }

    #[tokio::test]
    async fn test_self_critique_failure_keeps_original_claims() {
        let mut generator =
            FakeGenerator::with_drafts(vec![DraftClaim::new("claim").with_confidence(0.7)]);
        generator.fail_self_critique = true;
        let mut agent = ReasoningAgent::new(Arc::new(generator), true);

        let result = agent.run("content", &perspective(), None).await;

        assert_eq!(agent.phase(), AgentPhase::Done);
        assert_eq!(result.claims.len(), 1);
        assert!(!result.self_critique_applied);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].detail.contains("self-critique"));
    }

    #[tokio::test]
    async fn test_branch_context_tags_claims() {
        let generator = Arc::new(FakeGenerator::with_drafts(vec![DraftClaim::new("claim")]));
        let mut agent = ReasoningAgent::new(generator, false);
        let context = CritiqueContext::for_branch("sub-point", TreePath::root().child(1));

        let result = agent.run("content", &perspective(), Some(&context)).await;

        assert_eq!(result.claims[0].tree_path.to_string(), "1");
        assert_eq!(result.claims[0].id, ClaimId::new("logician-1-c0"));
    }

    #[tokio::test]
    async fn test_severity_parsed_leniently_from_draft() {
        let generator = Arc::new(FakeGenerator::with_drafts(vec![
            DraftClaim::new("claim").with_severity("CRITICAL"),
        ]));
        let mut agent = ReasoningAgent::new(generator, false);

        let result = agent.run("content", &perspective(), None).await;
        assert_eq!(result.claims[0].severity, Severity::Critical);
    }
}
