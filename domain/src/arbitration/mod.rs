//! Arbitration domain
//!
//! The arbiter reviews all perspectives' claims together and proposes
//! per-claim adjustments plus a holistic score. This module holds the
//! arbitration value objects and the pure confidence-adjustment math.

pub mod adjustments;
pub mod entities;

pub use adjustments::{AdjustmentOutcome, ClampSignal, apply_delta, apply_recursive, resolve_area_label};
pub use entities::{ArbiterVerdict, ArbitrationAdjustment};
