//! Progress notification port
//!
//! Defines the interface for reporting progress during a council run.
//! Implementations live in the presentation layer (console bars, plain
//! text) — use cases only emit events.

use council_domain::Stage;

/// Callback for progress updates during council execution
pub trait CouncilProgress: Send + Sync {
    /// Called when a stage starts, with the number of units it will run
    fn on_stage_start(&self, stage: &Stage, total_units: usize);

    /// Called when one unit (a perspective branch, the arbiter) completes
    fn on_unit_complete(&self, stage: &Stage, unit: &str, success: bool);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: &Stage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl CouncilProgress for NoProgress {
    fn on_stage_start(&self, _stage: &Stage, _total_units: usize) {}
    fn on_unit_complete(&self, _stage: &Stage, _unit: &str, _success: bool) {}
    fn on_stage_complete(&self, _stage: &Stage) {}
}
