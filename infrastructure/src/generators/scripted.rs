//! Scripted generator
//!
//! A fully deterministic [`CritiqueGenerator`] for offline runs (`--dry-run`)
//! and demos: claims come from explicit scripts keyed by perspective id, or
//! from a derived placeholder when no script exists. No I/O, no randomness.
//!
//! [`CritiqueGenerator`]: council_application::CritiqueGenerator

use async_trait::async_trait;
use council_application::ports::critique_generator::{
    CritiqueContext, CritiqueGenerator, GeneratorError,
};
use council_domain::{AgentPerspective, ArbiterVerdict, Claim, ClaimRevision, DraftClaim};
use std::collections::HashMap;

/// Deterministic scripted implementation of the generator port
#[derive(Default)]
pub struct ScriptedGenerator {
    scripts: HashMap<String, Vec<DraftClaim>>,
    decompositions: HashMap<String, serde_json::Value>,
    verdict: Option<ArbiterVerdict>,
    derive_placeholders: bool,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator that fabricates one placeholder claim per perspective
    ///
    /// Useful for demo runs: any cohort produces a coherent (if shallow)
    /// report without any scripts.
    pub fn demo() -> Self {
        Self {
            derive_placeholders: true,
            verdict: Some(
                ArbiterVerdict::new(Vec::new(), 75)
                    .with_justification("Dry run: no live arbitration performed."),
            ),
            ..Self::default()
        }
    }

    /// Script the drafts one perspective returns
    pub fn with_script(mut self, perspective_id: impl Into<String>, drafts: Vec<DraftClaim>) -> Self {
        self.scripts.insert(perspective_id.into(), drafts);
        self
    }

    /// Script the decomposition one perspective returns
    pub fn with_decomposition(
        mut self,
        perspective_id: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        self.decompositions.insert(perspective_id.into(), value);
        self
    }

    /// Script the arbitration verdict
    pub fn with_verdict(mut self, verdict: ArbiterVerdict) -> Self {
        self.verdict = Some(verdict);
        self
    }

    fn placeholder(&self, content: &str, perspective: &AgentPerspective) -> DraftClaim {
        let excerpt: String = content.split_whitespace().take(8).collect::<Vec<_>>().join(" ");
        // deterministic spread so demo reports are not a wall of 0.5s
        let confidence = 0.4 + (perspective.id.len() % 5) as f64 * 0.1;
        DraftClaim::new(format!(
            "{} review of \"{}\" found no blocking issues",
            perspective.area, excerpt
        ))
        .with_confidence(confidence)
        .with_severity("low")
        .with_recommendation("Re-run against a live generator for substantive critique.")
    }
}

#[async_trait]
impl CritiqueGenerator for ScriptedGenerator {
    async fn critique(
        &self,
        content: &str,
        perspective: &AgentPerspective,
        _context: Option<&CritiqueContext>,
    ) -> Result<Vec<DraftClaim>, GeneratorError> {
        if let Some(drafts) = self.scripts.get(&perspective.id) {
            return Ok(drafts.clone());
        }
        if self.derive_placeholders {
            return Ok(vec![self.placeholder(content, perspective)]);
        }
        Ok(Vec::new())
    }

    async fn self_critique(
        &self,
        _content: &str,
        _perspective: &AgentPerspective,
        _claims: &[Claim],
    ) -> Result<Vec<ClaimRevision>, GeneratorError> {
        // scripted runs confirm every claim as written
        Ok(Vec::new())
    }

    async fn decompose(
        &self,
        _content: &str,
        perspective: &AgentPerspective,
    ) -> Result<serde_json::Value, GeneratorError> {
        Ok(self
            .decompositions
            .get(&perspective.id)
            .cloned()
            .unwrap_or_else(|| serde_json::json!([])))
    }

    async fn arbitrate(
        &self,
        _content: &str,
        _claims: &[Claim],
        _cohort: &str,
    ) -> Result<ArbiterVerdict, GeneratorError> {
        match &self.verdict {
            Some(verdict) => Ok(verdict.clone()),
            None => Err(GeneratorError::Provider("no verdict scripted".to_string())),
        }
    }
}
