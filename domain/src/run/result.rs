//! Per-branch results and recoverable-error descriptors

use crate::claim::entities::Claim;
use serde::{Deserialize, Serialize};

/// Class of a recoverable per-branch failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentErrorKind {
    /// Generator call timed out
    Timeout,
    /// Generator response could not be parsed
    MalformedResponse,
    /// Provider-side failure (rate limit, server error)
    Provider,
    /// Transport-level failure
    Transport,
    /// Decomposition response matched neither accepted shape
    Decomposition,
    /// Call was cancelled
    Cancelled,
}

impl AgentErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentErrorKind::Timeout => "timeout",
            AgentErrorKind::MalformedResponse => "malformed_response",
            AgentErrorKind::Provider => "provider",
            AgentErrorKind::Transport => "transport",
            AgentErrorKind::Decomposition => "decomposition",
            AgentErrorKind::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for AgentErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recoverable failure, converted to data at the branch boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentError {
    /// The perspective whose branch failed
    pub perspective_id: String,
    /// Failure class
    pub kind: AgentErrorKind,
    /// Human-readable detail
    pub detail: String,
}

impl AgentError {
    pub fn new(
        perspective_id: impl Into<String>,
        kind: AgentErrorKind,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            perspective_id: perspective_id.into(),
            kind,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for AgentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.perspective_id, self.kind, self.detail)
    }
}

/// Aggregate output of one reasoning branch (agent or tree)
///
/// A failed branch yields an empty claim set with a populated error list
/// rather than an `Err` — callers tolerate partial failures and the run
/// never aborts for one branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResult {
    pub perspective_id: String,
    pub claims: Vec<Claim>,
    pub self_critique_applied: bool,
    pub errors: Vec<AgentError>,
}

impl AgentResult {
    /// A successful result with claims
    pub fn success(perspective_id: impl Into<String>, claims: Vec<Claim>) -> Self {
        Self {
            perspective_id: perspective_id.into(),
            claims,
            self_critique_applied: false,
            errors: Vec::new(),
        }
    }

    /// A zero-claim result recording why the branch produced nothing
    pub fn failed(perspective_id: impl Into<String>, error: AgentError) -> Self {
        Self {
            perspective_id: perspective_id.into(),
            claims: Vec::new(),
            self_critique_applied: false,
            errors: vec![error],
        }
    }

    pub fn with_self_critique_applied(mut self, applied: bool) -> Self {
        self.self_critique_applied = applied;
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::entities::ClaimId;
    use crate::claim::severity::Severity;

    #[test]
    fn test_failed_result_is_data_not_error() {
        let result = AgentResult::failed(
            "logician",
            AgentError::new("logician", AgentErrorKind::Timeout, "deadline exceeded"),
        );
        assert!(result.is_empty());
        assert!(result.has_errors());
        assert_eq!(result.errors[0].kind, AgentErrorKind::Timeout);
    }

    #[test]
    fn test_success_result() {
        let claims = vec![Claim::new(
            ClaimId::new("l-c0"),
            "logician",
            "text",
            0.5,
            Severity::Low,
        )];
        let result = AgentResult::success("logician", claims).with_self_critique_applied(true);
        assert!(!result.is_empty());
        assert!(result.self_critique_applied);
    }

    #[test]
    fn test_error_display_names_perspective_and_class() {
        let err = AgentError::new("ethicist", AgentErrorKind::Provider, "rate limited");
        let text = err.to_string();
        assert!(text.contains("ethicist"));
        assert!(text.contains("provider"));
    }
}
