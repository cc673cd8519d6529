//! Council run stages

use serde::{Deserialize, Serialize};

/// Stage of a council run
///
/// The orchestrator walks `Initialized → FanningOut → Arbitrating →
/// Synthesizing → Completed`, landing on `CompletedWithWarnings` when any
/// branch failed but the run still produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Run constructed, nothing dispatched yet
    Initialized,
    /// Perspectives evaluating in parallel
    FanningOut,
    /// Arbiter reviewing the combined claim set
    Arbitrating,
    /// Merging, deduplicating, ranking
    Synthesizing,
    /// Finished cleanly
    Completed,
    /// Finished, but at least one agent or the arbiter failed along the way
    CompletedWithWarnings,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Initialized => "initialized",
            Stage::FanningOut => "fanning_out",
            Stage::Arbitrating => "arbitrating",
            Stage::Synthesizing => "synthesizing",
            Stage::Completed => "completed",
            Stage::CompletedWithWarnings => "completed_with_warnings",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Initialized => "Initialized",
            Stage::FanningOut => "Perspective Fan-Out",
            Stage::Arbitrating => "Arbitration",
            Stage::Synthesizing => "Synthesis",
            Stage::Completed => "Completed",
            Stage::CompletedWithWarnings => "Completed (with warnings)",
        }
    }

    /// Whether this is a terminal stage
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Completed | Stage::CompletedWithWarnings)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
