//! Domain layer for critique-council
//!
//! This crate contains the core business logic of the critique council:
//! claims, perspectives, arbitration math, synthesis, and the parsing of
//! generator responses. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Council
//! Multiple independent critique perspectives examine the same content in
//! parallel. Each perspective produces a set of [`Claim`]s with confidence
//! and severity.
//!
//! ## Arbitration
//! An impartial second pass reviews all claims together and proposes
//! per-claim confidence deltas and severity overrides, plus a holistic
//! score for the content.
//!
//! ## Synthesis
//! All claims are merged, adjusted, deduplicated, and ranked into a single
//! [`SynthesisReport`].

pub mod arbitration;
pub mod claim;
pub mod core;
pub mod parsing;
pub mod perspective;
pub mod prompt;
pub mod run;
pub mod synthesis;

// Re-export commonly used types
pub use arbitration::{
    adjustments::{
        AdjustmentOutcome, ClampSignal, apply_delta, apply_recursive, resolve_area_label,
    },
    entities::{ArbiterVerdict, ArbitrationAdjustment},
};
pub use claim::{
    entities::{Claim, ClaimId, ClaimRevision, DraftClaim, TreePath},
    severity::Severity,
};
pub use crate::core::{content::Content, error::DomainError};
pub use parsing::{
    DecompositionShapeError, ParseError, extract_json, parse_arbiter, parse_claims,
    parse_decomposition, parse_revisions,
};
pub use perspective::{entities::AgentPerspective, registry::PerspectiveRegistry};
pub use prompt::CouncilPrompt;
pub use run::{
    log::{ExecutionLog, LogRecord},
    result::{AgentError, AgentErrorKind, AgentResult},
    stage::Stage,
};
pub use synthesis::{
    report::{RankedClaim, SynthesisReport},
    synthesize::{SynthesisAudit, SynthesisOptions, Synthesized, synthesize},
};
