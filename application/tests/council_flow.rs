//! End-to-end council flow through a scripted generator
//!
//! Everything here is deterministic: the fake returns literal claim sets per
//! perspective, so assertions cover the full pipeline — fan-out, arbitration,
//! synthesis, execution log — without any I/O.

use async_trait::async_trait;
use council_application::ports::critique_generator::{
    CritiqueContext, CritiqueGenerator, GeneratorError,
};
use council_application::{CouncilConfig, RunCouncilError, RunCouncilInput, RunCouncilUseCase};
use council_domain::{
    AgentPerspective, ArbiterVerdict, ArbitrationAdjustment, Claim, ClaimId, ClaimRevision,
    DraftClaim, PerspectiveRegistry, Stage,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Scripted generator: per-perspective claim scripts, optional failures.
#[derive(Default)]
struct ScriptedFake {
    /// perspective id -> drafts to return
    scripts: HashMap<String, Vec<DraftClaim>>,
    /// perspective ids whose every call fails
    failing: Vec<String>,
    /// verdict to return, or None to fail arbitration
    verdict: Option<ArbiterVerdict>,
}

impl ScriptedFake {
    fn script(mut self, perspective_id: &str, drafts: Vec<DraftClaim>) -> Self {
        self.scripts.insert(perspective_id.to_string(), drafts);
        self
    }

    fn failing(mut self, perspective_id: &str) -> Self {
        self.failing.push(perspective_id.to_string());
        self
    }

    fn verdict(mut self, verdict: ArbiterVerdict) -> Self {
        self.verdict = Some(verdict);
        self
    }
}

#[async_trait]
impl CritiqueGenerator for ScriptedFake {
    async fn critique(
        &self,
        _content: &str,
        perspective: &AgentPerspective,
        _context: Option<&CritiqueContext>,
    ) -> Result<Vec<DraftClaim>, GeneratorError> {
        if self.failing.contains(&perspective.id) {
            return Err(GeneratorError::Timeout(Duration::from_secs(30)));
        }
        Ok(self.scripts.get(&perspective.id).cloned().unwrap_or_default())
    }

    async fn self_critique(
        &self,
        _content: &str,
        _perspective: &AgentPerspective,
        _claims: &[Claim],
    ) -> Result<Vec<ClaimRevision>, GeneratorError> {
        Ok(Vec::new())
    }

    async fn decompose(
        &self,
        _content: &str,
        _perspective: &AgentPerspective,
    ) -> Result<serde_json::Value, GeneratorError> {
        // flat runs: nothing to split
        Ok(serde_json::json!([]))
    }

    async fn arbitrate(
        &self,
        _content: &str,
        _claims: &[Claim],
        _cohort: &str,
    ) -> Result<ArbiterVerdict, GeneratorError> {
        match &self.verdict {
            Some(verdict) => Ok(verdict.clone()),
            None => Err(GeneratorError::Malformed("unparsable verdict".into())),
        }
    }
}

fn registry(ids: &[&str]) -> PerspectiveRegistry {
    PerspectiveRegistry::new(
        "test_cohort",
        ids.iter()
            .map(|id| AgentPerspective::new(*id, format!("The {}", id), format!("Area {}", id), ""))
            .collect(),
    )
}

fn flat_config() -> CouncilConfig {
    CouncilConfig::default().with_max_depth(0).without_self_critique()
}

/// The worked scenario: two perspectives, near-duplicate claims, one
/// arbiter boost. The duplicate is dropped, the survivor adjusted.
#[tokio::test]
async fn council_merges_and_arbitrates() {
    let generator = ScriptedFake::default()
        .script(
            "A",
            vec![
                DraftClaim::new("System X crashes under load")
                    .with_confidence(0.6)
                    .with_severity("medium"),
            ],
        )
        .script(
            "B",
            vec![
                DraftClaim::new("System X crashes under load!")
                    .with_confidence(0.55)
                    .with_severity("medium"),
            ],
        )
        .verdict(
            ArbiterVerdict::new(
                vec![ArbitrationAdjustment::new(ClaimId::new("A-c0"), 0.1)],
                70,
            )
            .with_justification("Both perspectives converge"),
        );

    let use_case = RunCouncilUseCase::new(Arc::new(generator));
    let input = RunCouncilInput::new("System X crashes under load.", registry(&["A", "B"]))
        .with_config(flat_config());

    let output = use_case.execute(input).await.unwrap();

    assert_eq!(output.status, Stage::Completed);
    assert_eq!(output.report.ranked_claims.len(), 1);
    let top = &output.report.ranked_claims[0];
    assert_eq!(top.claim.id, ClaimId::new("A-c0"));
    assert!((top.confidence - 0.7).abs() < 1e-9);
    assert_eq!(output.report.dropped_duplicates, 1);
    assert_eq!(output.report.perspective_summary["A"], 1);
    assert_eq!(output.report.perspective_summary["B"], 0);
    assert_eq!(output.report.arbiter_overall_score, Some(70));
}

/// 2 of 5 perspectives fail on every call; the run still completes with
/// claims from the remaining 3 and zero counts for the failed two.
#[tokio::test]
async fn council_tolerates_partial_failures() {
    let mut generator = ScriptedFake::default().verdict(ArbiterVerdict::new(vec![], 40));
    for id in ["p1", "p2", "p3"] {
        generator = generator.script(
            id,
            vec![DraftClaim::new(format!("distinct finding from {}", id)).with_confidence(0.5)],
        );
    }
    generator = generator.failing("p4").failing("p5");

    let use_case = RunCouncilUseCase::new(Arc::new(generator));
    let input = RunCouncilInput::new(
        "content",
        registry(&["p1", "p2", "p3", "p4", "p5"]),
    )
    .with_config(flat_config());

    let output = use_case.execute(input).await.unwrap();

    assert_eq!(output.status, Stage::CompletedWithWarnings);
    assert_eq!(output.report.ranked_claims.len(), 3);
    assert_eq!(output.report.perspective_summary["p4"], 0);
    assert_eq!(output.report.perspective_summary["p5"], 0);
    let silent: Vec<_> = output.report.silent_perspectives().collect();
    assert_eq!(silent, vec!["p4", "p5"]);
}

/// Arbitration failure alone does not abort the run: the report carries no
/// score and the status records the warning.
#[tokio::test]
async fn council_survives_arbitration_failure() {
    let generator = ScriptedFake::default().script(
        "A",
        vec![DraftClaim::new("lone finding").with_confidence(0.8)],
    );

    let use_case = RunCouncilUseCase::new(Arc::new(generator));
    let input =
        RunCouncilInput::new("content", registry(&["A"])).with_config(flat_config());

    let output = use_case.execute(input).await.unwrap();

    assert_eq!(output.status, Stage::CompletedWithWarnings);
    assert_eq!(output.report.arbiter_overall_score, None);
    assert_eq!(output.report.ranked_claims.len(), 1);
    assert!((output.report.ranked_claims[0].confidence - 0.8).abs() < 1e-9);
}

/// Fatal only when nothing at all was produced: zero claims AND no verdict.
#[tokio::test]
async fn council_fails_only_on_empty_run() {
    let generator = ScriptedFake::default().failing("A").failing("B");
    let use_case = RunCouncilUseCase::new(Arc::new(generator));
    let input =
        RunCouncilInput::new("content", registry(&["A", "B"])).with_config(flat_config());

    let error = use_case.execute(input).await.unwrap_err();
    assert!(matches!(error, RunCouncilError::EmptyRun));

    // same failures, but the arbiter still answers: run survives
    let generator = ScriptedFake::default()
        .failing("A")
        .failing("B")
        .verdict(ArbiterVerdict::new(vec![], 10).with_justification("nothing to judge"));
    let use_case = RunCouncilUseCase::new(Arc::new(generator));
    let input =
        RunCouncilInput::new("content", registry(&["A", "B"])).with_config(flat_config());

    let output = use_case.execute(input).await.unwrap();
    assert_eq!(output.report.ranked_claims.len(), 0);
    assert_eq!(output.report.arbiter_overall_score, Some(10));
}

#[tokio::test]
async fn council_rejects_empty_cohort() {
    let generator = ScriptedFake::default();
    let use_case = RunCouncilUseCase::new(Arc::new(generator));
    let input = RunCouncilInput::new("content", registry(&[]));

    assert!(matches!(
        use_case.execute(input).await,
        Err(RunCouncilError::NoPerspectives)
    ));
}

/// The execution log walks the stages in order and attributes per-perspective
/// events.
#[tokio::test]
async fn council_logs_stage_transitions() {
    let generator = ScriptedFake::default()
        .script("A", vec![DraftClaim::new("finding").with_confidence(0.5)])
        .verdict(ArbiterVerdict::new(vec![], 60));

    let use_case = RunCouncilUseCase::new(Arc::new(generator));
    let input =
        RunCouncilInput::new("content", registry(&["A"])).with_config(flat_config());

    let output = use_case.execute(input).await.unwrap();

    assert_eq!(
        output.log.stage_sequence(),
        vec![
            Stage::Initialized,
            Stage::FanningOut,
            Stage::Arbitrating,
            Stage::Synthesizing,
            Stage::Completed,
        ]
    );
    assert!(
        output
            .log
            .records()
            .iter()
            .any(|r| r.perspective_id.as_deref() == Some("A"))
    );
}

/// Identical input, two runs: byte-identical ranked output.
#[tokio::test]
async fn council_output_is_deterministic() {
    let build = || {
        ScriptedFake::default()
            .script(
                "A",
                vec![
                    DraftClaim::new("alpha finding entirely").with_confidence(0.7),
                    DraftClaim::new("beta finding entirely").with_confidence(0.7),
                ],
            )
            .script(
                "B",
                vec![DraftClaim::new("gamma finding entirely").with_confidence(0.4)],
            )
            .verdict(ArbiterVerdict::new(vec![], 55))
    };

    // two independent executions
    let first = RunCouncilUseCase::new(Arc::new(build()))
        .execute(
            RunCouncilInput::new("content", registry(&["A", "B"])).with_config(flat_config()),
        )
        .await
        .unwrap();
    let second = RunCouncilUseCase::new(Arc::new(build()))
        .execute(
            RunCouncilInput::new("content", registry(&["A", "B"])).with_config(flat_config()),
        )
        .await
        .unwrap();

    let a = serde_json::to_vec(&first.report).unwrap();
    let b = serde_json::to_vec(&second.report).unwrap();
    assert_eq!(a, b);
}
