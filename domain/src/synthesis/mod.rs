//! Synthesis domain
//!
//! Merges every perspective's claims into one deterministic, deduplicated,
//! ranked report. The pipeline: flatten in perspective/tree order → apply
//! arbitration adjustments → deduplicate → resolve labels → sort → count.

pub mod dedup;
pub mod report;
pub mod synthesize;

pub use report::{RankedClaim, SynthesisReport};
pub use synthesize::{SynthesisAudit, SynthesisOptions, Synthesized, synthesize};
