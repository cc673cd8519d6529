//! Infrastructure layer for critique-council
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: configuration file loading, a deterministic scripted
//! generator for offline runs, and a prompt-backed generator over a
//! pluggable text-completion backend.

pub mod config;
pub mod generators;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileCohortConfig, FilePerspective};
pub use generators::{
    completion::{CommandCompletion, CompletionError, TextCompletion},
    prompt_backed::PromptBackedGenerator,
    scripted::ScriptedGenerator,
};
