//! Perspective registry - the active cohort for a run

use super::entities::AgentPerspective;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The active cohort of perspectives for a council run
///
/// The registry is the single source of truth for which perspectives exist
/// and what their areas are called. Label resolution at synthesis time reads
/// this registry — never a hardcoded cohort name — so running a
/// scientific-methodology cohort instead of the default philosophical one
/// labels claims correctly with no code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerspectiveRegistry {
    cohort: String,
    perspectives: Vec<AgentPerspective>,
}

impl PerspectiveRegistry {
    pub fn new(cohort: impl Into<String>, perspectives: Vec<AgentPerspective>) -> Self {
        Self {
            cohort: cohort.into(),
            perspectives,
        }
    }

    /// The built-in philosophical cohort (default)
    pub fn philosophical() -> Self {
        Self::new(
            "philosophical",
            vec![
                AgentPerspective::new(
                    "logician",
                    "The Logician",
                    "Logical Rigor",
                    "Examine the content for invalid inferences, equivocation, \
                     circular reasoning, and unstated premises. Judge only the \
                     structure of the argument, not its conclusions.",
                ),
                AgentPerspective::new(
                    "epistemologist",
                    "The Epistemologist",
                    "Epistemic Grounding",
                    "Examine how the content knows what it claims to know: the \
                     quality of sources, the gap between evidence and assertion, \
                     and overclaiming beyond what is warranted.",
                ),
                AgentPerspective::new(
                    "ethicist",
                    "The Ethicist",
                    "Ethical Implications",
                    "Examine the content for unexamined value judgments, affected \
                     parties it ignores, and consequences it does not own.",
                ),
                AgentPerspective::new(
                    "pragmatist",
                    "The Pragmatist",
                    "Practical Consequences",
                    "Examine whether the content's claims survive contact with \
                     practice: feasibility, cost, failure modes, and what would \
                     actually change if it were acted upon.",
                ),
            ],
        )
    }

    /// The built-in scientific-methodology cohort
    pub fn scientific_methodology() -> Self {
        Self::new(
            "scientific_methodology",
            vec![
                AgentPerspective::new(
                    "empiricist",
                    "The Empiricist",
                    "Empirical Support",
                    "Examine whether each claim is supported by observation or \
                     measurement, and whether the data presented could in \
                     principle have come out otherwise.",
                ),
                AgentPerspective::new(
                    "statistician",
                    "The Statistician",
                    "Statistical Validity",
                    "Examine sample sizes, effect sizes, multiple-comparison \
                     hazards, and whether the quantitative reasoning supports \
                     the stated conclusions.",
                ),
                AgentPerspective::new(
                    "methodologist",
                    "The Methodologist",
                    "Methodological Soundness",
                    "Examine the design: controls, confounds, selection effects, \
                     and whether the method used can answer the question asked.",
                ),
                AgentPerspective::new(
                    "falsificationist",
                    "The Falsificationist",
                    "Falsifiability",
                    "Examine which claims are testable, what observation would \
                     refute them, and which are framed so that nothing could.",
                ),
            ],
        )
    }

    /// Look up a built-in cohort by name
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "philosophical" => Some(Self::philosophical()),
            "scientific_methodology" => Some(Self::scientific_methodology()),
            _ => None,
        }
    }

    /// Name of the active cohort
    pub fn cohort(&self) -> &str {
        &self.cohort
    }

    /// Look up a perspective by id
    pub fn get(&self, perspective_id: &str) -> Option<&AgentPerspective> {
        self.perspectives.iter().find(|p| p.id == perspective_id)
    }

    /// Whether a perspective id belongs to this cohort
    pub fn contains(&self, perspective_id: &str) -> bool {
        self.get(perspective_id).is_some()
    }

    /// Perspectives in cohort order
    pub fn perspectives(&self) -> &[AgentPerspective] {
        &self.perspectives
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentPerspective> {
        self.perspectives.iter()
    }

    pub fn len(&self) -> usize {
        self.perspectives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perspectives.is_empty()
    }

    /// Validate that the cohort can actually run
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.perspectives.is_empty() {
            return Err(DomainError::NoPerspectives);
        }
        Ok(())
    }
}

impl Default for PerspectiveRegistry {
    fn default() -> Self {
        Self::philosophical()
    }
}
