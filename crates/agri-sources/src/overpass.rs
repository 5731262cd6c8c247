//! # Overpass Adapter — Community Geographic Database
//!
//! Live HTTP adapter over an OpenStreetMap Overpass endpoint. Queries
//! `boundary=protected_area` ways and relations within 50 km of the
//! location and votes protected only when the nearest element center is
//! within 100 m — a tight threshold, because element centers are points
//! and a looser radius over community data would flood the consensus
//! with false positives.

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

const SOURCE_NAME: &str = "OpenStreetMap";

/// Search radius around the queried location, in meters.
const SEARCH_RADIUS_METERS: u32 = 50_000;

/// Containment threshold: inside a protected area only when this close
/// to an element center.
const CONTAINMENT_RADIUS_METERS: f64 = 100.0;

/// Configuration for the Overpass HTTP adapter.
#[derive(Debug, Clone)]
pub struct OverpassConfig {
    /// Base URL of the Overpass instance
    /// (e.g. `https://overpass-api.de`).
    pub base_url: String,
    /// Request timeout in seconds (default: 25, matching the query's
    /// server-side budget).
    pub timeout_secs: u64,
}

impl OverpassConfig {
    /// Configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 25,
        }
    }
}

/// Live HTTP client for the Overpass community database.
#[derive(Debug)]
pub struct OverpassAdapter {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    lat: Option<f64>,
    lon: Option<f64>,
    center: Option<OverpassCenter>,
    #[serde(default)]
    tags: OverpassTags,
}

#[derive(Debug, Deserialize)]
struct OverpassCenter {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OverpassTags {
    name: Option<String>,
}

impl OverpassElement {
    /// Node position, or the computed center for ways and relations.
    fn position(&self) -> Option<(f64, f64)> {
        if let Some(center) = &self.center {
            return Some((center.lat, center.lon));
        }
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

impl OverpassAdapter {
    /// Build the adapter from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotConfigured`] when the HTTP client
    /// cannot be constructed.
    pub fn new(config: OverpassConfig) -> Result<Self, SourceError> {
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
        let endpoint = format!("{}/api/interpreter", base.as_str().trim_end_matches('/'));
        Ok(Self { client, endpoint })
    }

    fn query_body(location: Coordinate) -> String {
        format!(
            "[out:json][timeout:25];\
             (relation[boundary=protected_area](around:{radius},{lat},{lng});\
             way[boundary=protected_area](around:{radius},{lat},{lng}););\
             out center meta;",
            radius = SEARCH_RADIUS_METERS,
            lat = location.latitude,
            lng = location.longitude,
        )
    }
}

#[async_trait]
impl ProtectedAreaSource for OverpassAdapter {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    async fn query(&self, location: Coordinate) -> Result<SourceObservation, SourceError> {
        let body = Self::query_body(location);
        let resp = retry_send(SOURCE_NAME, || {
            self.client
                .post(&self.endpoint)
                .header(reqwest::header::CONTENT_TYPE, "text/plain")
                .body(body.clone())
                .send()
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

        let parsed: OverpassResponse =
            resp.json().await.map_err(|e| SourceError::Deserialization {
                endpoint: self.endpoint.clone(),
                reason: e.to_string(),
            })?;

        let mut nearest: Option<(f64, Option<String>)> = None;
        for element in &parsed.elements {
            let Some((lat, lon)) = element.position() else {
                continue;
            };
            let Ok(center) = Coordinate::new(lat, lon) else {
                // Provider glitch: skip the element rather than fail
                // the whole query.
                continue;
            };
            let distance = haversine_meters(location, center);
            match &nearest {
                Some((best, _)) if *best <= distance => {}
                _ => nearest = Some((distance, element.tags.name.clone())),
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
            elements = parsed.elements.len(),
            is_protected = observation.is_protected,
            "overpass query settled"
        );
        Ok(observation)
    }
}
