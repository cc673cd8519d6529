//! Generator adapters
//!
//! Implementations of the [`CritiqueGenerator`] port:
//! - [`scripted::ScriptedGenerator`] - deterministic, offline, for dry runs
//!   and tests
//! - [`prompt_backed::PromptBackedGenerator`] - renders domain prompts over
//!   any [`completion::TextCompletion`] backend with per-call timeouts
//!
//! [`CritiqueGenerator`]: council_application::CritiqueGenerator

pub mod completion;
pub mod prompt_backed;
pub mod scripted;

pub use completion::{CommandCompletion, CompletionError, TextCompletion};
pub use prompt_backed::PromptBackedGenerator;
pub use scripted::ScriptedGenerator;
