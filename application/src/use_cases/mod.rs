//! Use cases for critique-council

pub mod arbitrate;
pub mod reasoning_agent;
pub mod reasoning_tree;
pub mod run_council;

pub use arbitrate::ArbitrateUseCase;
pub use reasoning_agent::{AgentPhase, ReasoningAgent};
pub use reasoning_tree::ReasoningTree;
pub use run_council::{RunCouncilError, RunCouncilInput, RunCouncilOutput, RunCouncilUseCase};
