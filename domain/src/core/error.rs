//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Per-branch generator failures are *not* errors at this level — they are
/// converted to data ([`crate::run::result::AgentError`] entries) at the
/// branch boundary. The only hard failure a council run can surface is
/// [`DomainError::EmptyRun`].
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No perspectives configured for the council")]
    NoPerspectives,

    #[error("Every perspective produced zero claims and arbitration failed")]
    EmptyRun,

    #[error("Invalid content: {0}")]
    InvalidContent(String),
}

impl DomainError {
    /// Check whether this error means the run produced nothing synthesizable
    pub fn is_empty_run(&self) -> bool {
        matches!(self, DomainError::EmptyRun)
    }
}
