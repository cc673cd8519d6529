//! Arbitration use case
//!
//! Runs the adjudicator pass over the combined claim set. Arbitration is an
//! enhancement, not a hard dependency: any failure degrades to "no verdict"
//! and synthesis proceeds on un-arbitrated claims.

use crate::ports::critique_generator::CritiqueGenerator;
use council_domain::{ArbiterVerdict, Claim};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for the arbitration pass
pub struct ArbitrateUseCase<G: CritiqueGenerator> {
    generator: Arc<G>,
}

impl<G: CritiqueGenerator> ArbitrateUseCase<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    /// Arbitrate the full claim set
    ///
    /// Returns `None` when the arbiter call fails or its output is
    /// unusable; the caller proceeds with zero adjustments and no score.
    pub async fn execute(
        &self,
        content: &str,
        claims: &[Claim],
        cohort: &str,
    ) -> Option<ArbiterVerdict> {
        match self.generator.arbitrate(content, claims, cohort).await {
            Ok(verdict) => {
                info!(
                    adjustments = verdict.adjustments.len(),
                    score = ?verdict.overall_score,
                    "arbitration complete"
                );
                Some(verdict)
            }
            Err(e) => {
                warn!("arbitration unavailable, proceeding without adjustments: {}", e);
                None
            }
        }
    }
}
