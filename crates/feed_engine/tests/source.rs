use std::time::Duration;

use feed_engine::{
    initial_videos, ContentSource, EngineError, FaultPolicy, MockContentSource,
    MutationConfirmer, SimulatedConfirmer, SimulatedNetwork, SimulationSettings,
};
use tokio::time::Instant;

#[tokio::test]
async fn mock_source_serves_catalog_when_backend_is_up() {
    let source = MockContentSource::seeded(&SimulationSettings::always_succeed(), 1);

    let first = source.fetch_initial_page().await.expect("initial page");
    assert_eq!(first, initial_videos());

    let page = source.fetch_page(6, 5).await.expect("page");
    assert_eq!(page.len(), 5);
    assert_eq!(page[0].id, "6");
}

#[tokio::test]
async fn mock_source_fails_when_backend_is_down() {
    let source = MockContentSource::new(&SimulationSettings::always_fail());

    let err = source.fetch_initial_page().await.unwrap_err();
    assert!(matches!(err, EngineError::Simulated { .. }));
    assert!(source.fetch_page(6, 5).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn page_fetch_waits_for_configured_delay() {
    let settings = SimulationSettings {
        faults: FaultPolicy::Never,
        ..SimulationSettings::default()
    };
    let source = MockContentSource::seeded(&settings, 5);

    let started = Instant::now();
    source.fetch_page(6, 5).await.expect("page");

    assert!(started.elapsed() >= Duration::from_millis(800));
}

#[tokio::test]
async fn confirmer_reports_backend_outcome() {
    let up = SimulatedConfirmer::with_network(SimulatedNetwork::always_succeed());
    assert!(up.confirm_like("1", true).await.is_ok());
    assert!(up.confirm_follow("u1", true).await.is_ok());

    let down = SimulatedConfirmer::with_network(SimulatedNetwork::always_fail());
    let err = down.confirm_like("1", true).await.unwrap_err();
    assert_eq!(err.to_string(), "like failed: simulated network error");
    assert!(down.confirm_follow("u1", false).await.is_err());
}
