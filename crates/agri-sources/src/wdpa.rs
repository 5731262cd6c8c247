//! # WDPA Registry Adapter — Official Protected-Area Database
//!
//! Snapshot-backed adapter over World Database on Protected Areas
//! records. The engine ships a default snapshot of Liberia's national
//! parks and forests for the initial deployment region; other
//! deployments inject their own snapshot (or swap in a live client
//! behind the same trait) without touching consensus logic.

use agri_core::Coordinate;
use async_trait::async_trait;

use crate::adapter::ProtectedAreaSource;
use crate::error::SourceError;
use crate::registry::{self, ProtectedAreaRecord};
use crate::types::SourceObservation;

const SOURCE_NAME: &str = "WDPA";

/// Official protected-area registry, snapshot-backed.
#[derive(Debug, Clone)]
pub struct WdpaRegistryAdapter {
    records: Vec<ProtectedAreaRecord>,
}

impl WdpaRegistryAdapter {
    /// Adapter over a caller-supplied registry snapshot.
    pub fn with_records(records: Vec<ProtectedAreaRecord>) -> Self {
        Self { records }
    }

    /// The default Liberian deployment snapshot: the five WDPA-listed
    /// national parks and forests, with containment radii approximating
    /// their extents.
    pub fn liberia() -> Self {
        Self::with_records(vec![
            ProtectedAreaRecord::embedded("Sapo National Park", 5.5, -8.5, 50.0),
            ProtectedAreaRecord::embedded("East Nimba Nature Reserve", 7.6, -8.5, 30.0),
            ProtectedAreaRecord::embedded("Grebo National Forest", 4.8, -7.8, 25.0),
            ProtectedAreaRecord::embedded("Krahn-Bassa National Forest", 6.2, -9.8, 40.0),
            ProtectedAreaRecord::embedded("Gola National Forest", 7.3, -10.8, 35.0),
        ])
    }
}

#[async_trait]
impl ProtectedAreaSource for WdpaRegistryAdapter {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    async fn query(&self, location: Coordinate) -> Result<SourceObservation, SourceError> {
        let observation = registry::resolve(&self.records, location);
        tracing::debug!(
            source = SOURCE_NAME,
            is_protected = observation.is_protected,
            nearest = observation.matched_area_name.as_deref().unwrap_or("-"),
            "registry snapshot resolved"
        );
        Ok(observation)
    }
}
