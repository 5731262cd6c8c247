//! # Forest Watch Adapter — Forest-Change Monitoring Regions
//!
//! Snapshot-backed adapter over broad forest-monitoring regions in the
//! style of Global Forest Watch's protected-areas layer. Regions are
//! deliberately coarse (tens of kilometers), so this source casts a wide
//! net and the tight-threshold sources keep it honest in consensus.

use agri_core::Coordinate;
use async_trait::async_trait;

use crate::adapter::ProtectedAreaSource;
use crate::error::SourceError;
use crate::registry::{self, ProtectedAreaRecord};
use crate::types::SourceObservation;

const SOURCE_NAME: &str = "Global Forest Watch";

/// Forest-change monitoring platform, snapshot-backed.
#[derive(Debug, Clone)]
pub struct ForestWatchAdapter {
    regions: Vec<ProtectedAreaRecord>,
}

impl ForestWatchAdapter {
    /// Adapter over a caller-supplied monitoring-region snapshot.
    pub fn with_regions(regions: Vec<ProtectedAreaRecord>) -> Self {
        Self { regions }
    }

    /// Default West-African monitoring regions for the Liberian
    /// deployment.
    pub fn west_africa() -> Self {
        Self::with_regions(vec![
            ProtectedAreaRecord::embedded("Liberian Forest Reserve (GFW)", 6.5, -9.5, 60.0),
            ProtectedAreaRecord::embedded("West African Biodiversity Hotspot", 7.0, -9.0, 80.0),
        ])
    }
}

#[async_trait]
impl ProtectedAreaSource for ForestWatchAdapter {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    async fn query(&self, location: Coordinate) -> Result<SourceObservation, SourceError> {
        let observation = registry::resolve(&self.regions, location);
        tracing::debug!(
            source = SOURCE_NAME,
            is_protected = observation.is_protected,
            "monitoring region snapshot resolved"
        );
        Ok(observation)
    }
}
