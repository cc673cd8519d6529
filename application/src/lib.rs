//! Application layer for critique-council
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer; all I/O is behind
//! the [`CritiqueGenerator`] port, so every use case is deterministic
//! under a scripted fake.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::CouncilConfig;
pub use ports::{
    critique_generator::{CritiqueContext, CritiqueGenerator, GeneratorError},
    progress::{CouncilProgress, NoProgress},
};
pub use use_cases::arbitrate::ArbitrateUseCase;
pub use use_cases::reasoning_agent::{AgentPhase, ReasoningAgent};
pub use use_cases::reasoning_tree::ReasoningTree;
pub use use_cases::run_council::{
    RunCouncilError, RunCouncilInput, RunCouncilOutput, RunCouncilUseCase,
};
