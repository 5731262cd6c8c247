//! Normalized result types shared by all source adapters.

use serde::{Deserialize, Serialize};

/// How a source query settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    /// The source responded and its answer was normalized.
    Ok,
    /// The source did not answer within its timeout budget.
    Timeout,
    /// The source failed (network, non-2xx, malformed response).
    Error,
}

impl std::fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Timeout => write!(f, "timeout"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// An adapter's normalized answer for one location query.
///
/// `distance_meters` is the distance to the nearest candidate area the
/// source knows about, or `None` when the source found nothing nearby.
/// `matched_area_name` names that nearest candidate when the provider
/// supplies one — it is only "the" protected area when `is_protected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceObservation {
    /// Distance in meters to the nearest known candidate area.
    pub distance_meters: Option<f64>,
    /// This source's vote: does the location fall inside a protected
    /// area, by this source's own containment threshold?
    pub is_protected: bool,
    /// Name of the nearest candidate area, if the provider names it.
    pub matched_area_name: Option<String>,
}

impl SourceObservation {
    /// An observation for a source that found nothing nearby.
    pub fn nothing_nearby() -> Self {
        Self {
            distance_meters: None,
            is_protected: false,
            matched_area_name: None,
        }
    }
}

/// One source's settled contribution to a verification call.
///
/// Created once per verification call per adapter; ephemeral, reduced
/// into the consensus verdict and not persisted independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectedAreaSourceResult {
    /// Which adapter produced this result.
    pub source_name: String,
    /// Distance to the nearest candidate area, when the query succeeded.
    pub distance_meters: Option<f64>,
    /// The source's protected vote (always `false` for failed queries).
    pub is_protected: bool,
    /// Name of the nearest candidate area, when known.
    pub matched_area_name: Option<String>,
    /// How the query settled.
    pub query_status: QueryStatus,
}

impl ProtectedAreaSourceResult {
    /// A successfully settled result carrying the adapter's observation.
    pub fn settled(source_name: impl Into<String>, observation: SourceObservation) -> Self {
        Self {
            source_name: source_name.into(),
            distance_meters: observation.distance_meters,
            is_protected: observation.is_protected,
            matched_area_name: observation.matched_area_name,
            query_status: QueryStatus::Ok,
        }
    }

    /// A result for a source that exhausted its timeout budget.
    pub fn timed_out(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            distance_meters: None,
            is_protected: false,
            matched_area_name: None,
            query_status: QueryStatus::Timeout,
        }
    }

    /// A result for a source that failed with an adapter error.
    pub fn failed(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            distance_meters: None,
            is_protected: false,
            matched_area_name: None,
            query_status: QueryStatus::Error,
        }
    }

    /// Whether this result counts toward the confidence denominator.
    pub fn succeeded(&self) -> bool {
        self.query_status == QueryStatus::Ok
    }
}
