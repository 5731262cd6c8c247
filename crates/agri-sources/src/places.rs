//! # Places Adapter — Biodiversity Places Registry
//!
//! Live HTTP adapter over an iNaturalist-style places API. Queries open
//! spaces within a ±0.5° bounding box of the location and votes
//! protected when the nearest place is within 1 km. Place records are
//! points of interest rather than authoritative polygons, so the
//! threshold stays tight to avoid false positives.

use agri_core::Coordinate;
use agri_geometry::haversine_meters;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::adapter::ProtectedAreaSource;
use crate::error::SourceError;
use crate::retry::retry_send;
use crate::types::SourceObservation;

const SOURCE_NAME: &str = "iNaturalist";

/// Half-width of the search bounding box, in degrees.
const SEARCH_BOX_DEGREES: f64 = 0.5;

/// Containment threshold for point-of-interest place records.
const CONTAINMENT_RADIUS_METERS: f64 = 1_000.0;

const RESULTS_PER_PAGE: u32 = 50;

/// Configuration for the places HTTP adapter.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// Base URL of the places API
    /// (e.g. `https://api.inaturalist.org`).
    pub base_url: String,
    /// Request timeout in seconds (default: 15).
    pub timeout_secs: u64,
}

impl PlacesConfig {
    /// Configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 15,
        }
    }
}

/// Live HTTP client for the biodiversity places registry.
#[derive(Debug)]
pub struct PlacesAdapter {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    results: Vec<PlaceRecord>,
}

#[derive(Debug, Deserialize)]
struct PlaceRecord {
    latitude: Option<f64>,
    longitude: Option<f64>,
    name: Option<String>,
}

impl PlacesAdapter {
    /// Build the adapter from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotConfigured`] when the HTTP client
    /// cannot be constructed.
    pub fn new(config: PlacesConfig) -> Result<Self, SourceError> {
        let base: Url = config
            .base_url
            .parse()
            .map_err(|e| SourceError::NotConfigured {
                reason: format!("invalid base URL {:?}: {e}", config.base_url),
            })?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SourceError::NotConfigured {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        let endpoint = format!("{}/v1/places", base.as_str().trim_end_matches('/'));
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ProtectedAreaSource for PlacesAdapter {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    async fn query(&self, location: Coordinate) -> Result<SourceObservation, SourceError> {
        let params = [
            ("place_type", "Open Space".to_string()),
            ("nelat", (location.latitude + SEARCH_BOX_DEGREES).to_string()),
            ("nelng", (location.longitude + SEARCH_BOX_DEGREES).to_string()),
            ("swlat", (location.latitude - SEARCH_BOX_DEGREES).to_string()),
            ("swlng", (location.longitude - SEARCH_BOX_DEGREES).to_string()),
            ("per_page", RESULTS_PER_PAGE.to_string()),
        ];

        let resp = retry_send(SOURCE_NAME, || {
            self.client.get(&self.endpoint).query(&params).send()
        })
        .await
        .map_err(|source| SourceError::Http {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::Api {
                endpoint: self.endpoint.clone(),
                status,
                body,
            });
        }

        let parsed: PlacesResponse =
            resp.json().await.map_err(|e| SourceError::Deserialization {
                endpoint: self.endpoint.clone(),
                reason: e.to_string(),
            })?;

        let mut nearest: Option<(f64, Option<String>)> = None;
        for place in &parsed.results {
            let (Some(lat), Some(lng)) = (place.latitude, place.longitude) else {
                continue;
            };
            let Ok(center) = Coordinate::new(lat, lng) else {
                continue;
            };
            let distance = haversine_meters(location, center);
            match &nearest {
                Some((best, _)) if *best <= distance => {}
                _ => nearest = Some((distance, place.name.clone())),
            }
        }

        let observation = match nearest {
            Some((distance_meters, matched_area_name)) => SourceObservation {
                is_protected: distance_meters <= CONTAINMENT_RADIUS_METERS,
                distance_meters: Some(distance_meters),
                matched_area_name,
            },
            None => SourceObservation::nothing_nearby(),
        };

        tracing::debug!(
            source = SOURCE_NAME,
            places = parsed.results.len(),
            is_protected = observation.is_protected,
            "places query settled"
        );
        Ok(observation)
    }
}
