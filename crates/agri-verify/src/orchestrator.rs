//! Concurrent fan-out over the configured protected-area sources.

use std::sync::Arc;
use std::time::Duration;

use agri_core::Coordinate;
use agri_sources::{
    ForestWatchAdapter, OverpassAdapter, OverpassConfig, PlacesAdapter, PlacesConfig,
    ProtectedAreaSource, ProtectedAreaSourceResult, SourceError, WdpaRegistryAdapter,
};
use tokio::task::JoinSet;

use crate::consensus::{consolidate, ConsensusVerdict, DegradedPolicy};

/// Timeout budgets and degradation policy for a verification call.
#[derive(Debug, Clone, Copy)]
pub struct OrchestratorConfig {
    /// Independent budget for each source query.
    pub source_timeout: Duration,
    /// Cap on the whole verification call, regardless of how individual
    /// sources behave. In-flight queries are abandoned when it expires.
    pub overall_timeout: Duration,
    /// When to mark the verdict degraded.
    pub degraded_policy: DegradedPolicy,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            source_timeout: Duration::from_secs(10),
            overall_timeout: Duration::from_secs(30),
            degraded_policy: DegradedPolicy::default(),
        }
    }
}

/// Fans a location query out to every configured source and reduces the
/// settled results into a [`ConsensusVerdict`].
///
/// Sources are shared trait objects, so production HTTP adapters,
/// registry snapshots, and deterministic test fakes all exercise the
/// same code path.
pub struct VerificationOrchestrator {
    sources: Vec<Arc<dyn ProtectedAreaSource>>,
    config: OrchestratorConfig,
}

impl VerificationOrchestrator {
    /// Orchestrator over the given sources with default budgets.
    pub fn new(sources: Vec<Arc<dyn ProtectedAreaSource>>) -> Self {
        Self::with_config(sources, OrchestratorConfig::default())
    }

    /// Orchestrator with explicit budgets and degradation policy.
    pub fn with_config(
        sources: Vec<Arc<dyn ProtectedAreaSource>>,
        config: OrchestratorConfig,
    ) -> Self {
        Self { sources, config }
    }

    /// The standard four-authority wiring for the Liberian deployment:
    /// WDPA and Global Forest Watch snapshots plus live Overpass and
    /// iNaturalist clients.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotConfigured`] when an HTTP client cannot
    /// be constructed.
    pub fn standard() -> Result<Self, SourceError> {
        let sources: Vec<Arc<dyn ProtectedAreaSource>> = vec![
            Arc::new(WdpaRegistryAdapter::liberia()),
            Arc::new(OverpassAdapter::new(OverpassConfig::new(
                "https://overpass-api.de",
            ))?),
            Arc::new(ForestWatchAdapter::west_africa()),
            Arc::new(PlacesAdapter::new(PlacesConfig::new(
                "https://api.inaturalist.org",
            ))?),
        ];
        Ok(Self::new(sources))
    }

    /// Number of configured sources (the consensus denominator base).
    pub fn sources_checked(&self) -> usize {
        self.sources.len()
    }

    /// Verify a location against every configured source.
    ///
    /// All-settled semantics: each source gets an independent timeout
    /// budget, failures and timeouts become `error`/`timeout` statuses,
    /// and the overall deadline aborts whatever is still in flight —
    /// late results are discarded, not applied. This method never fails;
    /// total source failure surfaces as a degraded verdict.
    pub async fn verify(&self, location: Coordinate) -> ConsensusVerdict {
        let sources_checked = self.sources.len();
        tracing::info!(
            latitude = location.latitude,
            longitude = location.longitude,
            sources = sources_checked,
            "verifying protected-area status"
        );

        let mut tasks = JoinSet::new();
        for source in &self.sources {
            let source = Arc::clone(source);
            let budget = self.config.source_timeout;
            tasks.spawn(async move {
                let name = source.source_name().to_string();
                match tokio::time::timeout(budget, source.query(location)).await {
                    Ok(Ok(observation)) => {
                        ProtectedAreaSourceResult::settled(name, observation)
                    }
                    Ok(Err(err)) => {
                        tracing::warn!(source = %name, error = %err, "source query failed");
                        ProtectedAreaSourceResult::failed(name)
                    }
                    Err(_) => {
                        tracing::warn!(
                            source = %name,
                            budget_ms = budget.as_millis() as u64,
                            "source query timed out"
                        );
                        ProtectedAreaSourceResult::timed_out(name)
                    }
                }
            });
        }

        let deadline = tokio::time::Instant::now() + self.config.overall_timeout;
        let mut settled = Vec::with_capacity(sources_checked);
        loop {
            match tokio::time::timeout_at(deadline, tasks.join_next()).await {
                Ok(Some(Ok(result))) => settled.push(result),
                Ok(Some(Err(join_err))) => {
                    tracing::error!(error = %join_err, "source task did not complete");
                }
                Ok(None) => break,
                Err(_) => {
                    tracing::warn!(
                        settled = settled.len(),
                        sources = sources_checked,
                        "overall verification budget expired, abandoning in-flight sources"
                    );
                    tasks.abort_all();
                    break;
                }
            }
        }

        let verdict = consolidate(&settled, sources_checked, self.config.degraded_policy);
        tracing::info!(
            is_protected = verdict.is_protected,
            confidence_percent = verdict.confidence_percent,
            sources_succeeded = verdict.sources_succeeded,
            sources_confirmed = verdict.sources_confirmed,
            degraded = verdict.degraded,
            "consensus verdict computed"
        );
        verdict
    }
}
