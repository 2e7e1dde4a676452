//! Fault injection - remote failures and injected disturbances must never
//! stall the dashboard or corrupt its snapshot.

use std::time::Duration;

use satellite_telemetry::{
    DashboardConfig, Evaluator, LinkStatus, LocalSampler, PredictorClient, SamplerMode,
    SnapshotCell, TelemetryDashboard,
};

#[tokio::test]
async fn remote_failure_flips_link_and_keeps_last_values() {
    // Nothing listens on the discard port; every tick fails fast.
    let config = DashboardConfig {
        mode: SamplerMode::Remote,
        endpoint: "http://127.0.0.1:9".to_string(),
        poll_interval_ms: 10,
        request_timeout_ms: 200,
        ..DashboardConfig::default()
    };

    let before = satellite_telemetry::Snapshot::initial();
    let mut dashboard = TelemetryDashboard::new(config).expect("Config is valid");
    dashboard.start();

    tokio::time::sleep(Duration::from_millis(250)).await;
    let snapshot = dashboard.snapshot();
    dashboard.stop();

    assert_eq!(snapshot.link, LinkStatus::Disconnected);
    assert_eq!(snapshot.tick, 0, "Failed ticks must not ingest");
    assert_eq!(
        snapshot.reading.temperature, before.reading.temperature,
        "Reading must retain its previous value"
    );
    assert_eq!(snapshot.reading.voltage, before.reading.voltage);
    assert_eq!(snapshot.reading.pressure, before.reading.pressure);
    assert!(snapshot.temperature_history.is_empty());
}

#[test]
fn link_drop_preserves_snapshot_values() {
    let mut evaluator = Evaluator::new(80.0, 10);
    let sampler = LocalSampler::new(1);
    let reading = sampler.generate();

    let cell = SnapshotCell::new(evaluator.ingest(reading));

    // The failure path only flips the connectivity indicator.
    cell.update(|snapshot| snapshot.link = LinkStatus::Disconnected);

    let after = cell.load();
    assert_eq!(after.link, LinkStatus::Disconnected);
    assert_eq!(after.reading.temperature, reading.temperature);
    assert_eq!(after.temperature_history.len(), 1);
}

#[tokio::test]
async fn remote_strategy_survives_unreachable_endpoint() {
    let client = PredictorClient::new("http://127.0.0.1:9", Duration::from_millis(200))
        .expect("Client should build");
    let sampler = satellite_telemetry::Sampler::Remote(LocalSampler::new(1), client);

    let outcome = sampler.sample("SAT-001").await;

    assert!(sampler.is_remote());
    assert_eq!(outcome.link, LinkStatus::Disconnected);
    assert!(outcome.reading.is_none(), "Failed ticks yield no reading");
    assert!(outcome.verdict.is_none());
}

#[tokio::test]
async fn health_probe_reports_unreachable_endpoint() {
    let client = PredictorClient::new("http://127.0.0.1:9", Duration::from_millis(200))
        .expect("Client should build");
    assert!(client.health().await.is_err());
}

#[test]
fn injected_disturbance_trips_anomaly() {
    let mut sampler = LocalSampler::new(1);
    // Push the simulated band past the threshold.
    sampler.base_temperature += 30.0;

    let mut evaluator = Evaluator::new(80.0, 10);
    let snapshot = evaluator.ingest(sampler.generate());

    assert!(snapshot.anomaly.is_anomaly, "Disturbed readings must trip the threshold");
    assert!(snapshot.anomaly.score > 0.0);
}
