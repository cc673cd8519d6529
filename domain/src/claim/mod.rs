//! Claim domain
//!
//! A [`Claim`](entities::Claim) is one atomic critique assertion produced by
//! a perspective: what is wrong (or right), how confident the perspective is,
//! and how severe the issue would be if real.

pub mod entities;
pub mod severity;

pub use entities::{Claim, ClaimId, ClaimRevision, DraftClaim, TreePath};
pub use severity::Severity;
