//! Shared mechanics for snapshot-backed sources.
//!
//! The registry-style authorities (WDPA, forest monitoring) are modeled
//! as a list of named areas with a center and a containment radius. A
//! location is protected by such a source when it lies within the
//! nearest record's own radius — loose by construction, matching the
//! reserve-polygon granularity of the underlying data.

use agri_core::Coordinate;
use agri_geometry::haversine_meters;
use serde::{Deserialize, Serialize};

use crate::types::SourceObservation;

/// One protected-area record in a registry snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectedAreaRecord {
    /// Official name of the area.
    pub name: String,
    /// Nominal center of the area.
    pub center: Coordinate,
    /// Containment radius in kilometers, approximating the area extent.
    pub radius_km: f64,
}

impl ProtectedAreaRecord {
    /// Build a record, panicking on invalid coordinates.
    ///
    /// Only used for embedded snapshot data whose coordinates are fixed
    /// at compile time; runtime snapshots construct [`Coordinate`]s
    /// through the validating path.
    pub(crate) fn embedded(name: &str, latitude: f64, longitude: f64, radius_km: f64) -> Self {
        Self {
            name: name.to_string(),
            center: Coordinate {
                latitude,
                longitude,
            },
            radius_km,
        }
    }
}

/// Resolve a location against a registry snapshot.
///
/// Finds the record whose center is nearest the location and votes
/// protected when the location is inside that record's radius. An empty
/// snapshot yields a nothing-nearby observation.
pub(crate) fn resolve(records: &[ProtectedAreaRecord], location: Coordinate) -> SourceObservation {
    let mut nearest: Option<(&ProtectedAreaRecord, f64)> = None;
    for record in records {
        let distance = haversine_meters(location, record.center);
        match nearest {
            Some((_, best)) if best <= distance => {}
            _ => nearest = Some((record, distance)),
        }
    }

    match nearest {
        Some((record, distance_meters)) => SourceObservation {
            distance_meters: Some(distance_meters),
            is_protected: distance_meters <= record.radius_km * 1_000.0,
            matched_area_name: Some(record.name.clone()),
        },
        None => SourceObservation::nothing_nearby(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Vec<ProtectedAreaRecord> {
        vec![
            ProtectedAreaRecord::embedded("Near Reserve", 6.0, -9.0, 10.0),
            ProtectedAreaRecord::embedded("Far Reserve", 8.0, -11.0, 10.0),
        ]
    }

    #[test]
    fn picks_the_nearest_record() {
        let location = Coordinate::new(6.05, -9.0).expect("valid");
        let obs = resolve(&snapshot(), location);
        assert_eq!(obs.matched_area_name.as_deref(), Some("Near Reserve"));
    }

    #[test]
    fn inside_radius_votes_protected() {
        // ~5.5 km from the Near Reserve center, radius 10 km.
        let location = Coordinate::new(6.05, -9.0).expect("valid");
        let obs = resolve(&snapshot(), location);
        assert!(obs.is_protected);
        assert!(obs.distance_meters.expect("distance") < 10_000.0);
    }

    #[test]
    fn outside_radius_votes_clear_but_reports_distance() {
        // ~55 km from the Near Reserve center.
        let location = Coordinate::new(6.5, -9.0).expect("valid");
        let obs = resolve(&snapshot(), location);
        assert!(!obs.is_protected);
        assert!(obs.distance_meters.expect("distance") > 10_000.0);
        assert_eq!(obs.matched_area_name.as_deref(), Some("Near Reserve"));
    }

    #[test]
    fn empty_snapshot_finds_nothing() {
        let location = Coordinate::new(6.0, -9.0).expect("valid");
        let obs = resolve(&[], location);
        assert_eq!(obs, SourceObservation::nothing_nearby());
    }
}
