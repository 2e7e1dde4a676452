use std::time::Instant;

use tokio::task::JoinHandle;
use tokio::time::{interval, interval_at, Duration, Instant as TokioInstant, MissedTickBehavior};

use crate::dashboard::DashboardCore;
use crate::telemetry::LinkStatus;

/// Spawn the periodic sampling task.
///
/// Each tick runs as its own fire-and-forget task so an in-flight remote
/// request never delays the next tick. Overlapping ticks are independent;
/// the snapshot cell is last-writer-wins.
pub fn spawn_sampler_task(core: DashboardCore) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut poll_ms = core.config.get().poll_interval_ms;
        let mut ticker = interval(Duration::from_millis(poll_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            // Poll interval changes take effect at tick boundaries.
            let current = core.config.get().poll_interval_ms;
            if current != poll_ms {
                poll_ms = current;
                let period = Duration::from_millis(poll_ms);
                ticker = interval_at(TokioInstant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            }

            tokio::spawn(run_tick(core.clone()));
        }
    })
}

async fn run_tick(core: DashboardCore) {
    let cfg = core.config.get();

    // Apply runtime threshold/window changes before this tick's ingest.
    // A shrunk window keeps only its most recent entries.
    {
        let mut evaluator = core.evaluator.lock();
        evaluator.set_threshold(cfg.threshold_celsius);
        if evaluator.window_size() != cfg.window_size {
            evaluator.set_window_size(cfg.window_size);
        }
    }

    let tick_start = Instant::now();
    let outcome = core.sampler.sample(&cfg.satellite_id).await;
    core.metrics.record_generation(tick_start.elapsed());

    match outcome.reading {
        Some(reading) => {
            let proc_start = Instant::now();
            let snapshot = {
                let mut evaluator = core.evaluator.lock();
                match outcome.verdict {
                    Some(verdict) => evaluator.ingest_remote(reading, verdict),
                    None => evaluator.ingest(reading),
                }
            };
            core.metrics.record_processing(proc_start.elapsed());

            if snapshot.anomaly.is_anomaly {
                core.events.write(format!(
                    "[SAMPLER] Temperature anomaly: {:.2} °C (score {:.2})",
                    reading.temperature, snapshot.anomaly.score
                ));
            }

            let previous = core.snapshots.load().link;
            if previous != snapshot.link {
                core.events
                    .write(format!("[LINK] {previous} -> {}", snapshot.link));
            }

            core.snapshots.store(snapshot.clone());
            core.channels.publish(snapshot);
        }
        None => {
            // Remote failure: keep the previous reading and windows, only
            // flip the connectivity indicator. The next tick is the retry.
            core.metrics.record_failed_request();
            let mut was_reachable = false;
            core.snapshots.update(|snapshot| {
                was_reachable = snapshot.link != LinkStatus::Disconnected;
                snapshot.link = LinkStatus::Disconnected;
            });
            if was_reachable {
                core.events.write(
                    "[LINK] Remote predictor unreachable, keeping last reading".to_string(),
                );
            }
        }
    }

    core.metrics.record_tick();
    core.metrics.record_e2e(tick_start.elapsed());
}
