//! # Parcel Identifiers & Metadata
//!
//! Newtypes for the land parcels whose boundaries the engine verifies.
//! A [`ParcelId`] is UUID-based and always valid by construction;
//! [`ParcelMetadata`] carries the descriptive fields the compliance
//! report downstream attaches to a verdict.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier for a land parcel under compliance tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParcelId(Uuid);

impl ParcelId {
    /// Create a new random parcel identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a parcel identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ParcelId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ParcelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descriptive parcel fields carried into the compliance record.
///
/// These come from the (out-of-scope) farmer-onboarding collaborator and
/// are passed through untouched — the engine never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelMetadata {
    /// The parcel being verified.
    pub parcel_id: ParcelId,
    /// Registered holder of the parcel, if known.
    pub farmer_name: Option<String>,
    /// Commodity grown on the parcel (e.g. "Cocoa", "Rubber").
    pub commodity: Option<String>,
    /// Administrative region of the parcel (e.g. "Sinoe County").
    pub county: Option<String>,
}

impl ParcelMetadata {
    /// Metadata with only an identifier, for callers with nothing else.
    pub fn bare(parcel_id: ParcelId) -> Self {
        Self {
            parcel_id,
            farmer_name: None,
            commodity: None,
            county: None,
        }
    }
}
