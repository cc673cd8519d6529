//! Confidence-adjustment math and label resolution
//!
//! Pure, deterministic functions — no I/O, no logging. Where something is
//! worth logging (a clamp fired, an adjustment targeted a missing claim),
//! the functions report it back as data and the caller decides what to do.

use super::entities::ArbiterVerdict;
use crate::claim::entities::Claim;
use crate::perspective::registry::PerspectiveRegistry;
use crate::synthesis::report::RankedClaim;

/// Signal that applying a delta pushed the value out of [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampSignal {
    /// The sum exceeded 1.0 and was clamped down
    High,
    /// The sum fell below 0.0 and was clamped up
    Low,
}

/// Apply a confidence delta, clamping the result into [0.0, 1.0]
///
/// Returns the clamped confidence and a [`ClampSignal`] when clamping
/// actually fired, so callers can log the event without the math itself
/// doing I/O.
pub fn apply_delta(original: f64, delta: f64) -> (f64, Option<ClampSignal>) {
    let raw = original + delta;
    if raw > 1.0 {
        (1.0, Some(ClampSignal::High))
    } else if raw < 0.0 {
        (0.0, Some(ClampSignal::Low))
    } else {
        (raw, None)
    }
}

/// Result of applying a verdict's adjustments to a claim set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjustmentOutcome {
    /// Adjustments whose target existed and were applied
    pub applied: usize,
    /// Adjustments whose target claim id was not in the set
    pub unknown_targets: usize,
    /// Applications where the delta had to be clamped
    pub clamped: usize,
}

/// Apply every adjustment in a verdict to its target claim
///
/// Targets are matched by claim id. Unknown targets are skipped and counted
/// — the caller should log a single warning, never fail the run over them.
pub fn apply_recursive(ranked: &mut [RankedClaim], verdict: &ArbiterVerdict) -> AdjustmentOutcome {
    let mut outcome = AdjustmentOutcome::default();

    for adjustment in &verdict.adjustments {
        let Some(target) = ranked
            .iter_mut()
            .find(|r| r.claim.id == adjustment.target_claim_id)
        else {
            outcome.unknown_targets += 1;
            continue;
        };

        let (adjusted, clamp) = apply_delta(target.confidence, adjustment.confidence_delta);
        target.confidence = adjusted;
        if clamp.is_some() {
            outcome.clamped += 1;
        }
        if let Some(severity) = adjustment.severity_override {
            target.severity = severity;
        }
        outcome.applied += 1;
    }

    outcome
}

/// Resolve the area label for a claim against the active registry
///
/// A claim whose perspective is registered gets that perspective's area. A
/// claim from an unregistered perspective (e.g., a generic fallback agent
/// ran in place of a named one) is labeled from the *active cohort name*,
/// recomputed per run — never a hardcoded default.
pub fn resolve_area_label(claim: &Claim, registry: &PerspectiveRegistry) -> String {
    match registry.get(&claim.perspective_id) {
        Some(perspective) => perspective.area.clone(),
        None => format!("{} (unassigned)", registry.cohort()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitration::entities::ArbitrationAdjustment;
    use crate::claim::entities::ClaimId;
    use crate::claim::severity::Severity;

    fn ranked(id: &str, confidence: f64) -> RankedClaim {
        let claim = Claim::new(ClaimId::new(id), "p", "text", confidence, Severity::Medium);
        RankedClaim::from_claim(claim)
    }

    #[test]
    fn test_apply_delta_in_range() {
        let (value, clamp) = apply_delta(0.6, 0.1);
        assert!((value - 0.7).abs() < f64::EPSILON);
        assert!(clamp.is_none());
    }

    #[test]
    fn test_apply_delta_clamps_extremes() {
        assert_eq!(apply_delta(0.6, 5.0), (1.0, Some(ClampSignal::High)));
        assert_eq!(apply_delta(0.6, -5.0), (0.0, Some(ClampSignal::Low)));
    }

    #[test]
    fn test_apply_recursive_unknown_target_skipped() {
        let mut claims = vec![ranked("a-c0", 0.5)];
        let verdict = ArbiterVerdict::new(
            vec![
                ArbitrationAdjustment::new(ClaimId::new("a-c0"), 0.2),
                ArbitrationAdjustment::new(ClaimId::new("ghost-c9"), -0.4),
            ],
            50,
        );

        let outcome = apply_recursive(&mut claims, &verdict);

        assert_eq!(outcome.applied, 1);
        assert_eq!(outcome.unknown_targets, 1);
        assert!((claims[0].confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_apply_recursive_severity_override() {
        let mut claims = vec![ranked("a-c0", 0.5)];
        let verdict = ArbiterVerdict::new(
            vec![
                ArbitrationAdjustment::new(ClaimId::new("a-c0"), 0.0)
                    .with_severity(Severity::Critical),
            ],
            50,
        );

        apply_recursive(&mut claims, &verdict);
        assert_eq!(claims[0].severity, Severity::Critical);
        // the original claim is untouched
        assert_eq!(claims[0].claim.severity, Severity::Medium);
    }

    #[test]
    fn test_apply_recursive_counts_clamps() {
        let mut claims = vec![ranked("a-c0", 0.9), ranked("a-c1", 0.1)];
        let verdict = ArbiterVerdict::new(
            vec![
                ArbitrationAdjustment::new(ClaimId::new("a-c0"), 0.5),
                ArbitrationAdjustment::new(ClaimId::new("a-c1"), -0.5),
            ],
            50,
        );

        let outcome = apply_recursive(&mut claims, &verdict);
        assert_eq!(outcome.clamped, 2);
        assert_eq!(claims[0].confidence, 1.0);
        assert_eq!(claims[1].confidence, 0.0);
    }

    #[test]
    fn test_resolve_area_label_registered() {
        let registry = PerspectiveRegistry::philosophical();
        let claim = Claim::new(ClaimId::new("x"), "logician", "t", 0.5, Severity::Low);
        assert_eq!(resolve_area_label(&claim, &registry), "Logical Rigor");
    }

    #[test]
    fn test_resolve_area_label_unregistered_uses_active_cohort() {
        let registry = PerspectiveRegistry::scientific_methodology();
        let claim = Claim::new(ClaimId::new("x"), "generalist", "t", 0.5, Severity::Low);
        let label = resolve_area_label(&claim, &registry);
        assert!(label.contains("scientific_methodology"));
    }
}
