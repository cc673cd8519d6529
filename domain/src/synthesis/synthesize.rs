//! The synthesis algorithm: merge, adjust, dedupe, rank
//!
//! Fully deterministic: given identical agent results and an identical
//! verdict, two runs produce byte-identical ranked output. Every tiebreak
//! bottoms out at claim id.

use super::dedup::is_duplicate;
use super::report::{RankedClaim, SynthesisReport};
use crate::arbitration::adjustments::{apply_recursive, resolve_area_label};
use crate::arbitration::entities::ArbiterVerdict;
use crate::perspective::registry::PerspectiveRegistry;
use crate::run::result::AgentResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tuning knobs for synthesis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisOptions {
    /// Token-similarity threshold above which two claims are duplicates
    pub similarity_threshold: f64,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.82,
        }
    }
}

/// Observability counters from one synthesis pass
///
/// Not part of the report itself — the orchestrator logs these.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynthesisAudit {
    /// Adjustments whose target claim did not exist
    pub unknown_adjustment_targets: usize,
    /// Adjustment applications that had to be clamped
    pub clamp_events: usize,
}

/// A synthesis report plus its audit counters
#[derive(Debug, Clone)]
pub struct Synthesized {
    pub report: SynthesisReport,
    pub audit: SynthesisAudit,
}

/// Merge all agent results into the final report
///
/// Steps, in order:
/// 1. Flatten claims preserving perspective order, then tree-path order.
/// 2. Apply the verdict's adjustments (unknown targets skipped, counted).
/// 3. Deduplicate: survivor = highest adjusted confidence, tie → smaller id.
/// 4. Resolve area labels against the active registry.
/// 5. Sort: adjusted confidence desc, severity rank desc, id asc.
/// 6. Count survivors per perspective, including zero entries.
pub fn synthesize(
    results: &[AgentResult],
    verdict: Option<&ArbiterVerdict>,
    registry: &PerspectiveRegistry,
    options: &SynthesisOptions,
) -> Synthesized {
    let mut audit = SynthesisAudit::default();

    // 1. Flatten. Results arrive in cohort order; claims within a result are
    // already in tree order, but re-sort defensively so a misbehaving merge
    // upstream cannot break determinism here.
    let mut ranked: Vec<RankedClaim> = Vec::new();
    for result in results {
        let mut claims = result.claims.clone();
        claims.sort_by(|a, b| a.tree_path.cmp(&b.tree_path).then(a.id.cmp(&b.id)));
        ranked.extend(claims.into_iter().map(RankedClaim::from_claim));
    }

    // 2. Adjust.
    if let Some(verdict) = verdict {
        let outcome = apply_recursive(&mut ranked, verdict);
        audit.unknown_adjustment_targets = outcome.unknown_targets;
        audit.clamp_events = outcome.clamped;
    }

    // 3. Deduplicate.
    let mut survivors: Vec<RankedClaim> = Vec::new();
    let mut dropped_duplicates = 0;
    for candidate in ranked {
        let existing = survivors.iter().position(|s| {
            is_duplicate(
                &s.claim.claim_text,
                &candidate.claim.claim_text,
                options.similarity_threshold,
            )
        });
        match existing {
            Some(index) => {
                dropped_duplicates += 1;
                let survivor = &survivors[index];
                if candidate.confidence > survivor.confidence
                    || (candidate.confidence == survivor.confidence
                        && candidate.claim.id < survivor.claim.id)
                {
                    survivors[index] = candidate;
                }
            }
            None => survivors.push(candidate),
        }
    }

    // 4. Labels.
    for survivor in &mut survivors {
        survivor.area = resolve_area_label(&survivor.claim, registry);
    }

    // 5. Rank.
    survivors.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then(b.severity.rank().cmp(&a.severity.rank()))
            .then(a.claim.id.cmp(&b.claim.id))
    });

    // 6. Summary. Every registered perspective appears, even with zero
    // surviving claims; unregistered producers appear too.
    let mut perspective_summary: BTreeMap<String, usize> = registry
        .iter()
        .map(|p| (p.id.clone(), 0))
        .collect();
    for result in results {
        perspective_summary.entry(result.perspective_id.clone()).or_insert(0);
    }
    for survivor in &survivors {
        *perspective_summary
            .entry(survivor.claim.perspective_id.clone())
            .or_insert(0) += 1;
    }

    let (arbiter_overall_score, arbiter_score_justification) = match verdict {
        Some(v) if v.is_available() => (
            v.overall_score,
            Some(v.justification.clone()).filter(|j| !j.is_empty()),
        ),
        _ => (None, None),
    };

    Synthesized {
        report: SynthesisReport {
            ranked_claims: survivors,
            arbiter_overall_score,
            arbiter_score_justification,
            perspective_summary,
            dropped_duplicates,
        },
        audit,
    }
}
