//! Verification under partial and total source failure.
//!
//! The compliance-safety property of the whole engine: when the
//! external authorities are unreachable, a completed boundary still
//! produces a record, but its verdict says "unable to verify" — never a
//! confident "clear".

use std::sync::Arc;
use std::time::Duration;

use agri_boundary::BoundaryCaptureSession;
use agri_core::{CapturedFix, ParcelId, ParcelMetadata};
use agri_sources::{
    OverpassAdapter, OverpassConfig, PlacesAdapter, PlacesConfig, ProtectedAreaSource,
};
use agri_verify::{DegradedPolicy, OrchestratorConfig, VerificationOrchestrator};
use chrono::Utc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fix(latitude: f64, longitude: f64) -> CapturedFix {
    CapturedFix {
        latitude,
        longitude,
        accuracy_meters: 6.0,
        captured_at: Utc::now(),
    }
}

fn http_only_orchestrator(
    overpass: &MockServer,
    places: &MockServer,
) -> VerificationOrchestrator {
    let sources: Vec<Arc<dyn ProtectedAreaSource>> = vec![
        Arc::new(
            OverpassAdapter::new(OverpassConfig {
                base_url: overpass.uri(),
                timeout_secs: 1,
            })
            .expect("adapter"),
        ),
        Arc::new(
            PlacesAdapter::new(PlacesConfig {
                base_url: places.uri(),
                timeout_secs: 1,
            })
            .expect("adapter"),
        ),
    ];
    VerificationOrchestrator::with_config(
        sources,
        OrchestratorConfig {
            source_timeout: Duration::from_secs(8),
            overall_timeout: Duration::from_secs(10),
            degraded_policy: DegradedPolicy::AnyFailure,
        },
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn all_sources_failing_still_completes_with_a_degraded_record() {
    init_tracing();
    let overpass = MockServer::start().await;
    let places = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&overpass)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/places"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&places)
        .await;

    let orchestrator = http_only_orchestrator(&overpass, &places);

    let mut session = BoundaryCaptureSession::new(ParcelMetadata::bare(ParcelId::new()));
    session.add_point(&fix(6.300, -10.800)).expect("add");
    session.add_point(&fix(6.301, -10.800)).expect("add");
    session.add_point(&fix(6.301, -10.799)).expect("add");

    let record = session.complete(&orchestrator).await.expect("complete");

    // Unable to verify, not "verified clear".
    assert_eq!(record.verdict.sources_checked, 2);
    assert_eq!(record.verdict.sources_succeeded, 0);
    assert_eq!(record.verdict.confidence_percent, 0);
    assert!(!record.verdict.is_protected);
    assert!(record.verdict.degraded);
    assert!(record.verdict.nearest_distance_meters.is_none());

    // Geometry is unaffected by verification failure.
    assert!(record.geometry.area_hectares > 0.0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn one_failing_source_degrades_but_keeps_the_other_votes() {
    init_tracing();
    let overpass = MockServer::start().await;
    let places = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&overpass)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/places"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{
                "latitude": 6.3005,
                "longitude": -10.7995,
                "name": "Mangrove Sanctuary"
            }]
        })))
        .mount(&places)
        .await;

    let orchestrator = http_only_orchestrator(&overpass, &places);

    let mut session = BoundaryCaptureSession::new(ParcelMetadata::bare(ParcelId::new()));
    session.add_point(&fix(6.300, -10.800)).expect("add");
    session.add_point(&fix(6.301, -10.800)).expect("add");
    session.add_point(&fix(6.301, -10.799)).expect("add");

    let record = session.complete(&orchestrator).await.expect("complete");

    // The places source confirms (sanctuary within 1 km of the
    // centroid); the broken Overpass source degrades the verdict but
    // does not suppress the confirmation.
    assert_eq!(record.verdict.sources_checked, 2);
    assert_eq!(record.verdict.sources_succeeded, 1);
    assert_eq!(record.verdict.sources_confirmed, 1);
    assert_eq!(record.verdict.confidence_percent, 100);
    assert!(record.verdict.is_protected);
    assert!(record.verdict.degraded);
    assert_eq!(
        record.verdict.nearest_area_name.as_deref(),
        Some("Mangrove Sanctuary")
    );
}
