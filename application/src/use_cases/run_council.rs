//! Run council use case
//!
//! Top-level coordinator: fans out one reasoning tree per perspective,
//! arbitrates the combined claim set, synthesizes the final report, and
//! emits a structured execution log of stage transitions.

use crate::config::CouncilConfig;
use crate::ports::critique_generator::CritiqueGenerator;
use crate::ports::progress::{CouncilProgress, NoProgress};
use crate::use_cases::arbitrate::ArbitrateUseCase;
use crate::use_cases::reasoning_tree::ReasoningTree;
use council_domain::{
    AgentResult, Claim, Content, ExecutionLog, PerspectiveRegistry, Stage, SynthesisReport,
    synthesize,
};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Errors that can abort a council run
///
/// Per-branch failures never surface here; the run is fatal only when
/// there is nothing at all to synthesize.
#[derive(Error, Debug)]
pub enum RunCouncilError {
    #[error("No perspectives configured for the council")]
    NoPerspectives,

    #[error("Every perspective produced zero claims and arbitration failed")]
    EmptyRun,
}

/// Input for the RunCouncil use case
#[derive(Debug, Clone)]
pub struct RunCouncilInput {
    /// The content under critique
    pub content: Content,
    /// The active perspective cohort
    pub registry: PerspectiveRegistry,
    /// Execution configuration
    pub config: CouncilConfig,
}

impl RunCouncilInput {
    pub fn new(content: impl Into<Content>, registry: PerspectiveRegistry) -> Self {
        Self {
            content: content.into(),
            registry,
            config: CouncilConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CouncilConfig) -> Self {
        self.config = config;
        self
    }
}

/// Output of a council run
#[derive(Debug, Clone, Serialize)]
pub struct RunCouncilOutput {
    /// The synthesized report
    pub report: SynthesisReport,
    /// Ordered stage-transition log
    pub log: ExecutionLog,
    /// Terminal status: `Completed` or `CompletedWithWarnings`
    pub status: Stage,
}

impl RunCouncilOutput {
    pub fn has_warnings(&self) -> bool {
        self.status == Stage::CompletedWithWarnings
    }
}

/// Use case for running a full council
pub struct RunCouncilUseCase<G: CritiqueGenerator + 'static> {
    generator: Arc<G>,
}

impl<G: CritiqueGenerator + 'static> RunCouncilUseCase<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunCouncilInput) -> Result<RunCouncilOutput, RunCouncilError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunCouncilInput,
        progress: &dyn CouncilProgress,
    ) -> Result<RunCouncilOutput, RunCouncilError> {
        input
            .registry
            .validate()
            .map_err(|_| RunCouncilError::NoPerspectives)?;

        // The log is the only resource shared across concurrent branches;
        // a mutex keeps appends from interleaving.
        let log = Arc::new(Mutex::new(ExecutionLog::new()));
        log.lock().unwrap().record(
            Stage::Initialized,
            format!(
                "council run created: cohort '{}', {} perspectives, max_depth {}",
                input.registry.cohort(),
                input.registry.len(),
                input.config.max_depth
            ),
        );

        info!(
            cohort = input.registry.cohort(),
            perspectives = input.registry.len(),
            "starting council run"
        );

        // Stage 1: fan out one tree per perspective
        let results = self.fan_out(&input, progress, &log).await;
        let any_branch_errors = results.iter().any(AgentResult::has_errors);

        // Stage 2: arbitration over the combined claim set
        let verdict = self.arbitrate(&input, &results, progress, &log).await;

        // Fatal only when there is nothing to synthesize at all
        if results.iter().all(AgentResult::is_empty) && verdict.is_none() {
            log.lock().unwrap().record(
                Stage::Arbitrating,
                "no claims from any perspective and no verdict; aborting",
            );
            return Err(RunCouncilError::EmptyRun);
        }

        // Stage 3: synthesis
        log.lock().unwrap().record(Stage::Synthesizing, "merging claim sets");
        progress.on_stage_start(&Stage::Synthesizing, 1);

        let synthesized = synthesize(
            &results,
            verdict.as_ref(),
            &input.registry,
            &input.config.synthesis_options(),
        );
        if synthesized.audit.unknown_adjustment_targets > 0 {
            warn!(
                count = synthesized.audit.unknown_adjustment_targets,
                "arbitration adjustments targeted unknown claims"
            );
            log.lock().unwrap().record(
                Stage::Synthesizing,
                format!(
                    "{} adjustment(s) targeted unknown claim ids and were ignored",
                    synthesized.audit.unknown_adjustment_targets
                ),
            );
        }
        if synthesized.audit.clamp_events > 0 {
            log.lock().unwrap().record(
                Stage::Synthesizing,
                format!(
                    "{} confidence adjustment(s) clamped into [0, 1]",
                    synthesized.audit.clamp_events
                ),
            );
        }

        progress.on_unit_complete(&Stage::Synthesizing, "synthesis", true);
        progress.on_stage_complete(&Stage::Synthesizing);

        let status = if any_branch_errors || verdict.is_none() {
            Stage::CompletedWithWarnings
        } else {
            Stage::Completed
        };
        log.lock().unwrap().record(
            status,
            format!(
                "report ready: {} claims, {} duplicates dropped",
                synthesized.report.claim_count(),
                synthesized.report.dropped_duplicates
            ),
        );

        info!(
            claims = synthesized.report.claim_count(),
            status = status.as_str(),
            "council run finished"
        );

        let log = Arc::try_unwrap(log)
            .map(|m| m.into_inner().unwrap_or_default())
            .unwrap_or_default();

        Ok(RunCouncilOutput {
            report: synthesized.report,
            log,
            status,
        })
    }

    /// Fan out all perspectives in parallel and collect in cohort order
    async fn fan_out(
        &self,
        input: &RunCouncilInput,
        progress: &dyn CouncilProgress,
        log: &Arc<Mutex<ExecutionLog>>,
    ) -> Vec<AgentResult> {
        log.lock()
            .unwrap()
            .record(Stage::FanningOut, "dispatching perspectives");
        progress.on_stage_start(&Stage::FanningOut, input.registry.len());

        let mut join_set = JoinSet::new();
        for (index, perspective) in input.registry.iter().enumerate() {
            let tree = ReasoningTree::new(Arc::clone(&self.generator), input.config.clone());
            let content = input.content.text().to_string();
            let perspective = perspective.clone();

            join_set.spawn(async move {
                let result = tree.evaluate(&content, &perspective).await;
                (index, result)
            });
        }

        let mut indexed: Vec<(usize, AgentResult)> = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => {
                    let ok = !result.has_errors();
                    log.lock().unwrap().record_for(
                        Stage::FanningOut,
                        result.perspective_id.clone(),
                        format!(
                            "{} claim(s), {} error(s)",
                            result.claims.len(),
                            result.errors.len()
                        ),
                    );
                    progress.on_unit_complete(&Stage::FanningOut, &result.perspective_id, ok);
                    indexed.push((index, result));
                }
                Err(e) => {
                    warn!("perspective task join error: {}", e);
                }
            }
        }
        progress.on_stage_complete(&Stage::FanningOut);

        // cohort order, not completion order
        indexed.sort_by_key(|(index, _)| *index);
        indexed.into_iter().map(|(_, result)| result).collect()
    }

    /// Run the arbitration stage; failure degrades to `None`
    async fn arbitrate(
        &self,
        input: &RunCouncilInput,
        results: &[AgentResult],
        progress: &dyn CouncilProgress,
        log: &Arc<Mutex<ExecutionLog>>,
    ) -> Option<council_domain::ArbiterVerdict> {
        log.lock()
            .unwrap()
            .record(Stage::Arbitrating, "reviewing combined claim set");
        progress.on_stage_start(&Stage::Arbitrating, 1);

        let all_claims: Vec<Claim> = results
            .iter()
            .flat_map(|r| r.claims.iter().cloned())
            .collect();

        let verdict = ArbitrateUseCase::new(Arc::clone(&self.generator))
            .execute(
                input.content.text(),
                &all_claims,
                input.registry.cohort(),
            )
            .await;

        match &verdict {
            Some(v) => log.lock().unwrap().record(
                Stage::Arbitrating,
                format!(
                    "verdict: {} adjustment(s), score {:?}",
                    v.adjustments.len(),
                    v.overall_score
                ),
            ),
            None => log
                .lock()
                .unwrap()
                .record(Stage::Arbitrating, "arbitration unavailable"),
        }

        progress.on_unit_complete(&Stage::Arbitrating, "arbiter", verdict.is_some());
        progress.on_stage_complete(&Stage::Arbitrating);
        verdict
    }
}
