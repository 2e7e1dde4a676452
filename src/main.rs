use std::time::Duration;

use satellite_telemetry::{load_config, TelemetryDashboard};

#[tokio::main]
async fn main() {
    env_logger::init();

    println!("===========================================");
    println!("Satellite Telemetry Dashboard Core");
    println!("===========================================\n");

    let config = load_config("config/dashboard.toml");
    let poll_interval = Duration::from_millis(config.poll_interval_ms);

    let mut dashboard = match TelemetryDashboard::new(config) {
        Ok(dashboard) => dashboard,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    dashboard.start();

    for _ in 0..5 {
        tokio::time::sleep(poll_interval).await;
        let snapshot = dashboard.snapshot();
        println!(
            "[{}] tick {:>3}  temp {:6.2} °C  volt {:5.2} V  pressure {:6.2}  [{}]  anomaly: {} ({:.0}%)",
            snapshot.clock.format("%H:%M:%S"),
            snapshot.tick,
            snapshot.reading.temperature,
            snapshot.reading.voltage,
            snapshot.reading.pressure,
            snapshot.link,
            if snapshot.anomaly.is_anomaly { "YES" } else { "no" },
            snapshot.anomaly.confidence,
        );
    }

    dashboard.stop();

    let events = dashboard.events();
    if !events.is_empty() {
        println!("\n--- Event log ---");
        for line in events {
            println!("{line}");
        }
    }

    println!("\n--- Timing report ---");
    println!("{:#?}", dashboard.metrics_report());
}
