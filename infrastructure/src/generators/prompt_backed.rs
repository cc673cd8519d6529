//! Prompt-backed generator
//!
//! Implements the [`CritiqueGenerator`] port over any [`TextCompletion`]
//! backend: renders the domain prompt templates, enforces the per-call
//! timeout, and parses responses with the domain parsers. Failures map onto
//! [`GeneratorError`] classes so the core can record them uniformly.

use super::completion::{CompletionError, TextCompletion};
use async_trait::async_trait;
use council_application::ports::critique_generator::{
    CritiqueContext, CritiqueGenerator, GeneratorError,
};
use council_domain::{
    AgentPerspective, ArbiterVerdict, Claim, ClaimRevision, CouncilPrompt, DraftClaim, ParseError,
    extract_json, parse_arbiter, parse_claims, parse_revisions,
};
use std::time::Duration;
use tracing::debug;

/// Generator adapter over a text-completion backend
pub struct PromptBackedGenerator<C: TextCompletion> {
    completion: C,
    timeout: Duration,
}

impl<C: TextCompletion> PromptBackedGenerator<C> {
    pub fn new(completion: C, timeout: Duration) -> Self {
        Self {
            completion,
            timeout,
        }
    }

    /// One timed completion call with error-class mapping
    async fn call(&self, system: &str, user: &str) -> Result<String, GeneratorError> {
        match tokio::time::timeout(self.timeout, self.completion.complete(system, user)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(map_completion_error(e)),
            Err(_) => Err(GeneratorError::Timeout(self.timeout)),
        }
    }
}

fn map_completion_error(e: CompletionError) -> GeneratorError {
    match e {
        CompletionError::Spawn(detail) => GeneratorError::Transport(detail),
        CompletionError::Io(io) => GeneratorError::Transport(io.to_string()),
        CompletionError::NonZeroExit { .. } => GeneratorError::Provider(e.to_string()),
        CompletionError::Empty => GeneratorError::Malformed("empty response".to_string()),
    }
}

fn map_parse_error(e: ParseError) -> GeneratorError {
    GeneratorError::Malformed(e.to_string())
}

#[async_trait]
impl<C: TextCompletion> CritiqueGenerator for PromptBackedGenerator<C> {
    async fn critique(
        &self,
        content: &str,
        perspective: &AgentPerspective,
        context: Option<&CritiqueContext>,
    ) -> Result<Vec<DraftClaim>, GeneratorError> {
        let system = CouncilPrompt::critique_system(perspective);
        let assigned = context.and_then(|c| c.assigned_point.as_deref());
        let user = CouncilPrompt::critique_user(content, assigned);

        let response = self.call(&system, &user).await?;
        debug!(perspective = %perspective.id, "critique response received");
        parse_claims(&response).map_err(map_parse_error)
    }

    async fn self_critique(
        &self,
        content: &str,
        perspective: &AgentPerspective,
        claims: &[Claim],
    ) -> Result<Vec<ClaimRevision>, GeneratorError> {
        let system = CouncilPrompt::self_critique_system(perspective);
        let user = CouncilPrompt::self_critique_user(content, claims);

        let response = self.call(&system, &user).await?;
        parse_revisions(&response).map_err(map_parse_error)
    }

    async fn decompose(
        &self,
        content: &str,
        perspective: &AgentPerspective,
    ) -> Result<serde_json::Value, GeneratorError> {
        let system = CouncilPrompt::decomposition_system();
        let user = CouncilPrompt::decomposition_user(content);

        let response = self.call(system, &user).await?;
        // shape tolerance is the tree's concern; only "no JSON at all" is
        // a generator-level failure
        extract_json(&response)
            .ok_or_else(|| GeneratorError::Malformed("no JSON in decomposition".to_string()))
    }

    async fn arbitrate(
        &self,
        content: &str,
        claims: &[Claim],
        cohort: &str,
    ) -> Result<ArbiterVerdict, GeneratorError> {
        let system = CouncilPrompt::arbiter_system(cohort);
        let user = CouncilPrompt::arbiter_user(content, claims);

        let response = self.call(&system, &user).await?;
        parse_arbiter(&response).map_err(map_parse_error)
    }
}
