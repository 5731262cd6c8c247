//! # Protected-Area Source — Generic Trait Interface
//!
//! The single capability every external geospatial authority exposes to
//! the engine: given a coordinate, answer whether it falls inside a
//! protected area, with the nearest candidate's distance and name.
//!
//! Implementations must be `Send + Sync` so the orchestrator can share
//! them via `Arc` across concurrent query tasks. The trait is
//! object-safe to support runtime source configuration — production
//! wires HTTP-backed and snapshot-backed adapters interchangeably, and
//! tests substitute deterministic fakes without touching the consensus
//! logic above.

use agri_core::Coordinate;
use async_trait::async_trait;

use crate::error::SourceError;
use crate::types::SourceObservation;

/// A queryable external protected-area authority.
#[async_trait]
pub trait ProtectedAreaSource: Send + Sync {
    /// Short stable name of this source (e.g. "WDPA", "OpenStreetMap"),
    /// used in results, logs, and the consensus verdict.
    fn source_name(&self) -> &str;

    /// Query this authority for the given location.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the provider is unreachable,
    /// answers with a failure status, or returns a malformed response.
    /// Timeout budgets are imposed by the caller, not the adapter.
    async fn query(&self, location: Coordinate) -> Result<SourceObservation, SourceError>;
}
