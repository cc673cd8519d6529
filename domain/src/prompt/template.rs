//! Prompt templates for each generator role
//!
//! The templates instruct generators to emit the JSON shapes that
//! [`crate::parsing`] accepts. Wording is not load-bearing — any generator
//! producing those shapes works.

use crate::claim::entities::Claim;
use crate::perspective::entities::AgentPerspective;

/// Templates for generating prompts at each council stage
pub struct CouncilPrompt;

impl CouncilPrompt {
    /// System prompt for an initial critique pass
    pub fn critique_system(perspective: &AgentPerspective) -> String {
        format!(
            r#"You are {}, a critique agent focused on {}.
{}

Respond with a JSON array of claim objects. Each object:
{{"claim_text": "...", "evidence_text": "...", "confidence": 0.0-1.0, "severity": "low|medium|high|critical", "recommendation": "...", "concession": "... or omit"}}

Only include claims you can ground in the content. Output JSON only."#,
            perspective.name, perspective.area, perspective.instructions
        )
    }

    /// User prompt for an initial critique pass
    pub fn critique_user(content: &str, assigned_point: Option<&str>) -> String {
        match assigned_point {
            Some(point) => format!(
                r#"Content under critique:

{}

Your assigned sub-point: {}

Critique the content strictly with respect to your assigned sub-point."#,
                content, point
            ),
            None => format!(
                r#"Content under critique:

{}

Critique the content from your perspective."#,
                content
            ),
        }
    }

    /// System prompt for the self-critique pass
    pub fn self_critique_system(perspective: &AgentPerspective) -> String {
        format!(
            r#"You are {}, reviewing your own earlier critique for overreach.
Re-read the content and your claims. For each claim, either confirm it or revise it.
Lower confidence freely. Raise confidence ONLY if you can cite new evidence.

Respond with a JSON object:
{{"revisions": [{{"target_claim_id": "...", "revised_confidence": 0.0-1.0, "revised_text": "... or omit", "new_evidence": "... or omit"}}]}}

An empty revisions array means every claim stands as written. Output JSON only."#,
            perspective.name
        )
    }

    /// User prompt for the self-critique pass
    pub fn self_critique_user(content: &str, claims: &[Claim]) -> String {
        let claims_json = serde_json::to_string_pretty(claims).unwrap_or_default();
        format!(
            r#"Original content:

{}

Your claims:

{}

Review each claim against the content."#,
            content, claims_json
        )
    }

    /// System prompt for content decomposition
    pub fn decomposition_system() -> &'static str {
        r#"You decompose content into its distinct sub-points for focused review.
Identify the separable assertions or themes worth critiquing independently.

Respond with a JSON object: {"topics": ["sub-point one", "sub-point two", ...]}
Three to six sub-points is typical. Output JSON only."#
    }

    /// User prompt for content decomposition
    pub fn decomposition_user(content: &str) -> String {
        format!(
            r#"Decompose the following content into sub-points:

{}"#,
            content
        )
    }

    /// System prompt for the arbitration pass
    pub fn arbiter_system(cohort: &str) -> String {
        format!(
            r#"You are an impartial adjudicator reviewing critiques produced by the {} cohort.
You did not write any of these claims. Judge them against the original content:
strengthen underrated claims, weaken overconfident ones, and correct severities.
Reference existing claim ids only. Proposing zero adjustments is valid.

Respond with a JSON object:
{{"adjustments": [{{"target_claim_id": "...", "confidence_delta": -1.0..1.0, "severity_override": "low|medium|high|critical or omit", "comment": "..."}}],
 "overall_score": 0-100,
 "justification": "..."}}

The overall_score rates the content itself, not the critiques. Output JSON only."#,
            cohort
        )
    }

    /// User prompt for the arbitration pass
    pub fn arbiter_user(content: &str, claims: &[Claim]) -> String {
        let claims_json = serde_json::to_string_pretty(claims).unwrap_or_default();
        format!(
            r#"Original content:

{}

All claims across perspectives:

{}

Arbitrate."#,
            content, claims_json
        )
    }
}
