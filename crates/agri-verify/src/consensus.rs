//! Consensus verdict computation over settled source results.
//!
//! Pure reduction: the fan-out in [`crate::orchestrator`] produces a
//! list of settled results and [`consolidate`] turns them into a
//! verdict. Keeping this a standalone function means a stricter quorum
//! rule can replace the any-positive-vote policy without touching the
//! concurrency code, and the consensus math is exercised identically by
//! unit tests and production.

use agri_sources::ProtectedAreaSourceResult;
use serde::{Deserialize, Serialize};

/// When to mark a verdict as degraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradedPolicy {
    /// Degraded whenever any configured source failed to answer.
    #[default]
    AnyFailure,
    /// Degraded only when every configured source failed.
    TotalFailureOnly,
}

/// The reconciled answer of all configured sources for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusVerdict {
    /// Any-positive-vote overall verdict.
    pub is_protected: bool,
    /// Share of succeeded sources that voted protected, 0-100.
    /// Defined as 0 when no source succeeded.
    pub confidence_percent: u8,
    /// Number of configured sources.
    pub sources_checked: usize,
    /// Number of sources that answered within budget.
    pub sources_succeeded: usize,
    /// Number of succeeded sources voting protected.
    pub sources_confirmed: usize,
    /// When protected: name of the nearest confirming area. Never set
    /// for a clear verdict — the nearest candidate is unconfirmed.
    pub nearest_area_name: Option<String>,
    /// When protected: distance to the nearest confirming area.
    /// Otherwise: distance to the nearest known candidate area, as
    /// context only.
    pub nearest_distance_meters: Option<f64>,
    /// The verdict reflects incomplete verification. Always `true` when
    /// nothing succeeded; under [`DegradedPolicy::AnyFailure`] also on
    /// partial failure.
    pub degraded: bool,
}

/// Reduce settled source results into a consensus verdict.
///
/// `sources_checked` is the number of configured sources, which can
/// exceed `settled.len()` when the overall budget expired before every
/// source settled — those missing sources count as failed.
pub fn consolidate(
    settled: &[ProtectedAreaSourceResult],
    sources_checked: usize,
    policy: DegradedPolicy,
) -> ConsensusVerdict {
    let succeeded: Vec<&ProtectedAreaSourceResult> =
        settled.iter().filter(|r| r.succeeded()).collect();
    let confirming: Vec<&ProtectedAreaSourceResult> = succeeded
        .iter()
        .copied()
        .filter(|r| r.is_protected)
        .collect();

    let sources_succeeded = succeeded.len();
    let sources_confirmed = confirming.len();

    let confidence_percent = if sources_succeeded == 0 {
        0
    } else {
        (sources_confirmed as f64 / sources_succeeded as f64 * 100.0).round() as u8
    };

    let is_protected = sources_confirmed > 0;

    let (nearest_area_name, nearest_distance_meters) = if is_protected {
        match nearest(&confirming) {
            Some(result) => (
                result.matched_area_name.clone(),
                result.distance_meters,
            ),
            None => (None, None),
        }
    } else {
        // Nearest candidate among all successful sources, name withheld:
        // it is only the nearest known area, not a confirmed match.
        (None, nearest(&succeeded).and_then(|r| r.distance_meters))
    };

    let degraded = match policy {
        DegradedPolicy::AnyFailure => sources_succeeded < sources_checked,
        DegradedPolicy::TotalFailureOnly => sources_succeeded == 0,
    };

    ConsensusVerdict {
        is_protected,
        confidence_percent,
        sources_checked,
        sources_succeeded,
        sources_confirmed,
        nearest_area_name,
        nearest_distance_meters,
        degraded,
    }
}

fn nearest<'a>(
    results: &[&'a ProtectedAreaSourceResult],
) -> Option<&'a ProtectedAreaSourceResult> {
    results
        .iter()
        .copied()
        .filter(|r| r.distance_meters.is_some())
        .min_by(|a, b| {
            // Distances come from succeeded results and are finite.
            a.distance_meters
                .partial_cmp(&b.distance_meters)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_sources::SourceObservation;

    fn confirm(name: &str, area: &str, distance: f64) -> ProtectedAreaSourceResult {
        ProtectedAreaSourceResult::settled(
            name,
            SourceObservation {
                distance_meters: Some(distance),
                is_protected: true,
                matched_area_name: Some(area.to_string()),
            },
        )
    }

    fn deny(name: &str, distance: f64) -> ProtectedAreaSourceResult {
        ProtectedAreaSourceResult::settled(
            name,
            SourceObservation {
                distance_meters: Some(distance),
                is_protected: false,
                matched_area_name: Some(format!("{name} candidate")),
            },
        )
    }

    #[test]
    fn single_confirmation_flags_with_low_confidence() {
        let settled = vec![
            confirm("A", "Reserve", 800.0),
            deny("B", 5_000.0),
            deny("C", 7_000.0),
            deny("D", 9_000.0),
        ];
        let verdict = consolidate(&settled, 4, DegradedPolicy::AnyFailure);
        assert!(verdict.is_protected);
        assert_eq!(verdict.confidence_percent, 25);
        assert_eq!(verdict.sources_succeeded, 4);
        assert_eq!(verdict.sources_confirmed, 1);
        assert!(!verdict.degraded);
        assert_eq!(verdict.nearest_area_name.as_deref(), Some("Reserve"));
    }

    #[test]
    fn nearest_is_among_confirming_sources_only() {
        let settled = vec![
            confirm("A", "Far Reserve", 900.0),
            confirm("B", "Near Reserve", 300.0),
            deny("C", 50.0), // closer, but not confirming
        ];
        let verdict = consolidate(&settled, 3, DegradedPolicy::AnyFailure);
        assert_eq!(verdict.nearest_area_name.as_deref(), Some("Near Reserve"));
        assert_eq!(verdict.nearest_distance_meters, Some(300.0));
    }

    #[test]
    fn clear_verdict_reports_distance_without_a_name() {
        let settled = vec![deny("A", 4_000.0), deny("B", 2_500.0)];
        let verdict = consolidate(&settled, 2, DegradedPolicy::AnyFailure);
        assert!(!verdict.is_protected);
        assert_eq!(verdict.nearest_distance_meters, Some(2_500.0));
        assert!(verdict.nearest_area_name.is_none());
    }

    #[test]
    fn zero_succeeded_defines_zero_confidence() {
        let settled = vec![
            ProtectedAreaSourceResult::failed("A"),
            ProtectedAreaSourceResult::timed_out("B"),
        ];
        let verdict = consolidate(&settled, 2, DegradedPolicy::AnyFailure);
        assert_eq!(verdict.confidence_percent, 0);
        assert_eq!(verdict.sources_succeeded, 0);
        assert!(!verdict.is_protected);
        assert!(verdict.degraded);
    }

    #[test]
    fn confidence_rounds_to_nearest_percent() {
        let settled = vec![
            confirm("A", "Reserve", 100.0),
            deny("B", 1_000.0),
            deny("C", 1_000.0),
        ];
        let verdict = consolidate(&settled, 3, DegradedPolicy::AnyFailure);
        assert_eq!(verdict.confidence_percent, 33);

        let settled = vec![
            confirm("A", "Reserve", 100.0),
            confirm("B", "Reserve", 100.0),
            deny("C", 1_000.0),
        ];
        let verdict = consolidate(&settled, 3, DegradedPolicy::AnyFailure);
        assert_eq!(verdict.confidence_percent, 67);
    }

    #[test]
    fn missing_settlements_count_against_the_denominator_policy() {
        // Overall budget expired with only one of three sources settled.
        let settled = vec![deny("A", 2_000.0)];
        let verdict = consolidate(&settled, 3, DegradedPolicy::AnyFailure);
        assert_eq!(verdict.sources_checked, 3);
        assert_eq!(verdict.sources_succeeded, 1);
        assert!(verdict.degraded);
    }

    #[test]
    fn total_failure_only_policy_tolerates_partial_failure() {
        let settled = vec![
            deny("A", 2_000.0),
            ProtectedAreaSourceResult::timed_out("B"),
        ];
        let verdict = consolidate(&settled, 2, DegradedPolicy::TotalFailureOnly);
        assert!(!verdict.degraded);

        let all_failed = vec![
            ProtectedAreaSourceResult::failed("A"),
            ProtectedAreaSourceResult::timed_out("B"),
        ];
        let verdict = consolidate(&all_failed, 2, DegradedPolicy::TotalFailureOnly);
        assert!(verdict.degraded);
    }

    #[test]
    fn unable_to_verify_differs_from_verified_clear() {
        let all_failed = vec![
            ProtectedAreaSourceResult::failed("A"),
            ProtectedAreaSourceResult::failed("B"),
        ];
        let unable = consolidate(&all_failed, 2, DegradedPolicy::AnyFailure);

        let all_deny = vec![deny("A", 9_000.0), deny("B", 8_000.0)];
        let clear = consolidate(&all_deny, 2, DegradedPolicy::AnyFailure);

        assert!(!unable.is_protected && !clear.is_protected);
        assert!(unable.degraded && !clear.degraded);
        assert_eq!(unable.sources_succeeded, 0);
        assert_eq!(clear.sources_succeeded, 2);
    }
}
