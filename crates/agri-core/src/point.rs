//! # Validated GPS Capture Primitives
//!
//! [`CapturedFix`] is the raw tuple handed over by the capture
//! collaborator each time the user marks a vertex. [`BoundaryPoint`] is
//! the validated, identity-bearing form a boundary session stores, and
//! [`Coordinate`] is a bare validated lat/lng pair used for centroids and
//! verification queries.
//!
//! ## Validation
//!
//! [`BoundaryPoint`] and [`Coordinate`] are validated at construction:
//! finite values, latitude in [-90, 90], longitude in [-180, 180],
//! non-negative accuracy. `Deserialize` goes through the same constructor,
//! so wire input cannot bypass the checks. Once constructed a point is
//! immutable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

fn check_latitude(value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue {
            component: "latitude",
        });
    }
    if !(-90.0..=90.0).contains(&value) {
        return Err(ValidationError::LatitudeOutOfRange { value });
    }
    Ok(value)
}

fn check_longitude(value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue {
            component: "longitude",
        });
    }
    if !(-180.0..=180.0).contains(&value) {
        return Err(ValidationError::LongitudeOutOfRange { value });
    }
    Ok(value)
}

fn check_accuracy(value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue {
            component: "accuracy_meters",
        });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeAccuracy { value });
    }
    Ok(value)
}

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180].
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, validating range and finiteness.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for non-finite or out-of-range
    /// components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
        })
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.latitude, raw.longitude).map_err(serde::de::Error::custom)
    }
}

/// A raw GPS fix as delivered by the capture collaborator.
///
/// Unvalidated on purpose: validation happens when the boundary session
/// mints a [`BoundaryPoint`] from the fix, so a rejected fix produces a
/// typed error at the ingestion seam rather than a panic downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapturedFix {
    /// Reported latitude in decimal degrees.
    pub latitude: f64,
    /// Reported longitude in decimal degrees.
    pub longitude: f64,
    /// Reported GPS accuracy radius in meters.
    pub accuracy_meters: f64,
    /// Device timestamp of the fix.
    pub captured_at: DateTime<Utc>,
}

/// A validated, ordered vertex of a boundary polygon.
///
/// Immutable once created; discarded wholesale on boundary reset. The
/// `order` field is strictly increasing within one boundary — the session
/// enforces that invariant when appending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryPoint {
    /// Unique identity of this vertex.
    pub id: Uuid,
    /// Latitude in decimal degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180].
    pub longitude: f64,
    /// GPS accuracy radius in meters, >= 0.
    pub accuracy_meters: f64,
    /// Position within the boundary, strictly increasing.
    pub order: u32,
    /// Device timestamp of the capture.
    pub captured_at: DateTime<Utc>,
}

impl BoundaryPoint {
    /// Create a validated boundary point.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for non-finite or out-of-range
    /// coordinates or a negative accuracy radius.
    pub fn new(
        latitude: f64,
        longitude: f64,
        accuracy_meters: f64,
        order: u32,
        captured_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: Uuid::new_v4(),
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
            accuracy_meters: check_accuracy(accuracy_meters)?,
            order,
            captured_at,
        })
    }

    /// Mint a point from a raw capture fix at the given order.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the fix fails validation.
    pub fn from_fix(fix: &CapturedFix, order: u32) -> Result<Self, ValidationError> {
        Self::new(
            fix.latitude,
            fix.longitude,
            fix.accuracy_meters,
            order,
            fix.captured_at,
        )
    }

    /// The vertex position as a bare coordinate.
    pub fn coordinate(&self) -> Coordinate {
        // Validated at construction, so re-validation cannot fail.
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl<'de> Deserialize<'de> for BoundaryPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            id: Uuid,
            latitude: f64,
            longitude: f64,
            accuracy_meters: f64,
            order: u32,
            captured_at: DateTime<Utc>,
        }
        let raw = Raw::deserialize(deserializer)?;
        let mut point =
            BoundaryPoint::new(raw.latitude, raw.longitude, raw.accuracy_meters, raw.order, raw.captured_at)
                .map_err(serde::de::Error::custom)?;
        point.id = raw.id;
        Ok(point)
    }
}
