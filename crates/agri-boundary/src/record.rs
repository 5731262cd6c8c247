//! The composed compliance record and its composer.

use agri_core::{ParcelId, ParcelMetadata};
use agri_geometry::GeometryResult;
use agri_verify::ConsensusVerdict;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from composing a compliance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// No geometry result was supplied.
    #[error("cannot compose compliance record: geometry result is missing")]
    MissingGeometry,

    /// No consensus verdict was supplied.
    #[error("cannot compose compliance record: consensus verdict is missing")]
    MissingVerdict,
}

/// The reportable outcome of one completed boundary capture.
///
/// Pure aggregation of the geometry and verification outputs plus parcel
/// metadata. Composed once, never mutated; serializable for display,
/// PDF export, or persistence by the out-of-scope collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRecord {
    /// The parcel this record describes.
    pub parcel_id: ParcelId,
    /// Descriptive parcel fields, passed through untouched.
    pub metadata: ParcelMetadata,
    /// Geometry of the frozen boundary polygon.
    pub geometry: GeometryResult,
    /// Reconciled protected-area verdict for the parcel centroid.
    pub verdict: ConsensusVerdict,
    /// When the record was composed.
    pub computed_at: DateTime<Utc>,
}

/// Compose a compliance record from its two engine outputs.
///
/// Never recomputes geometry and never re-triggers verification — it
/// only merges what the callers already computed.
///
/// # Errors
///
/// Returns a typed [`ComposeError`] when either input is absent.
pub fn compose(
    geometry: Option<&GeometryResult>,
    verdict: Option<&ConsensusVerdict>,
    metadata: ParcelMetadata,
) -> Result<ComplianceRecord, ComposeError> {
    let geometry = geometry.ok_or(ComposeError::MissingGeometry)?;
    let verdict = verdict.ok_or(ComposeError::MissingVerdict)?;

    Ok(ComplianceRecord {
        parcel_id: metadata.parcel_id,
        metadata,
        geometry: geometry.clone(),
        verdict: verdict.clone(),
        computed_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_core::BoundaryPoint;
    use agri_verify::{consolidate, DegradedPolicy};

    fn geometry() -> GeometryResult {
        let points = vec![
            BoundaryPoint::new(6.40, -9.50, 5.0, 0, Utc::now()).expect("valid"),
            BoundaryPoint::new(6.41, -9.50, 5.0, 1, Utc::now()).expect("valid"),
            BoundaryPoint::new(6.41, -9.49, 5.0, 2, Utc::now()).expect("valid"),
        ];
        GeometryResult::from_points(&points)
    }

    fn verdict() -> ConsensusVerdict {
        consolidate(&[], 4, DegradedPolicy::AnyFailure)
    }

    #[test]
    fn composes_when_both_inputs_present() {
        let metadata = ParcelMetadata::bare(ParcelId::new());
        let record =
            compose(Some(&geometry()), Some(&verdict()), metadata.clone()).expect("compose");
        assert_eq!(record.parcel_id, metadata.parcel_id);
        assert_eq!(record.geometry.point_count, 3);
    }

    #[test]
    fn missing_geometry_is_a_typed_error() {
        let err = compose(None, Some(&verdict()), ParcelMetadata::bare(ParcelId::new()))
            .expect_err("must fail");
        assert_eq!(err, ComposeError::MissingGeometry);
    }

    #[test]
    fn missing_verdict_is_a_typed_error() {
        let err = compose(Some(&geometry()), None, ParcelMetadata::bare(ParcelId::new()))
            .expect_err("must fail");
        assert_eq!(err, ComposeError::MissingVerdict);
    }

    #[test]
    fn record_serializes_for_reporting() {
        let record = compose(
            Some(&geometry()),
            Some(&verdict()),
            ParcelMetadata::bare(ParcelId::new()),
        )
        .expect("compose");
        let json = serde_json::to_value(&record).expect("serialize");
        assert!(json["geometry"]["area_hectares"].is_number());
        assert!(json["verdict"]["degraded"].is_boolean());
        assert!(json["computed_at"].is_string());
    }
}
