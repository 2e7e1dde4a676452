//! Evaluator module - anomaly policy, summary statistics, and snapshots

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::history::HistoryWindow;
use crate::telemetry::{LinkStatus, TelemetryReading};

/// Confidence reported while a reading is flagged anomalous.
pub const ANOMALY_CONFIDENCE: f64 = 65.0;
/// Confidence reported for normal readings. Always above the anomaly value.
pub const NORMAL_CONFIDENCE: f64 = 95.0;

// ============================================================================
// DERIVED STATE
// ============================================================================

/// Anomaly flag, score, and confidence derived from the latest reading.
/// Recomputed on every tick; nothing here is persisted.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnomalyState {
    pub is_anomaly: bool,
    pub score: f64,
    pub confidence: f64,
}

impl Default for AnomalyState {
    fn default() -> Self {
        Self {
            is_anomaly: false,
            score: 0.0,
            confidence: NORMAL_CONFIDENCE,
        }
    }
}

/// Verdict returned by a remote predictor. Authoritative when present.
#[derive(Debug, Clone, Copy)]
pub struct RemoteVerdict {
    pub is_anomaly: bool,
    pub score: f64,
}

/// Per-tick summary statistics over the current windows.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct WindowStats {
    pub temperature_max: f64,
    pub voltage_min: f64,
    pub pressure_mean: f64,
}

// ============================================================================
// SNAPSHOT - Complete derived view handed to consumers
// ============================================================================

/// Value-type view of the dashboard state: latest reading, window copies,
/// anomaly state, and summary statistics. No aliasing of internal buffers.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub reading: TelemetryReading,
    pub temperature_history: Vec<f64>,
    pub voltage_history: Vec<f64>,
    pub pressure_history: Vec<f64>,
    pub anomaly: AnomalyState,
    pub stats: WindowStats,
    pub link: LinkStatus,
    pub clock: DateTime<Utc>,
    pub tick: u64,
}

impl Snapshot {
    /// State before the first tick: display placeholders, empty histories.
    pub fn initial() -> Self {
        Self {
            reading: TelemetryReading {
                timestamp: Utc::now(),
                temperature: 70.0,
                voltage: 3.3,
                pressure: 400.0,
                sequence_id: 0,
            },
            temperature_history: Vec::new(),
            voltage_history: Vec::new(),
            pressure_history: Vec::new(),
            anomaly: AnomalyState::default(),
            stats: WindowStats::default(),
            link: LinkStatus::Simulating,
            clock: Utc::now(),
            tick: 0,
        }
    }
}

// ============================================================================
// EVALUATOR - Owns the windows, derives everything else
// ============================================================================

/// Exclusive owner of the per-metric history windows.
///
/// All operations are total over their inputs; ingest is the single mutation
/// point and must be treated as a critical section when snapshot readers run
/// concurrently.
pub struct Evaluator {
    threshold_celsius: f64,
    temperature: HistoryWindow,
    voltage: HistoryWindow,
    pressure: HistoryWindow,
    tick: u64,
}

impl Evaluator {
    pub fn new(threshold_celsius: f64, window_size: usize) -> Self {
        Self {
            threshold_celsius,
            temperature: HistoryWindow::new(window_size),
            voltage: HistoryWindow::new(window_size),
            pressure: HistoryWindow::new(window_size),
            tick: 0,
        }
    }

    pub fn set_threshold(&mut self, threshold_celsius: f64) {
        self.threshold_celsius = threshold_celsius;
    }

    pub fn threshold(&self) -> f64 {
        self.threshold_celsius
    }

    /// Resize all three windows, keeping the most recent entries.
    pub fn set_window_size(&mut self, window_size: usize) {
        self.temperature.resize(window_size);
        self.voltage.resize(window_size);
        self.pressure.resize(window_size);
    }

    pub fn window_size(&self) -> usize {
        self.temperature.capacity()
    }

    /// Ingest a locally simulated reading and derive the next snapshot.
    pub fn ingest(&mut self, reading: TelemetryReading) -> Snapshot {
        self.apply(reading, None, LinkStatus::Simulating)
    }

    /// Ingest a remotely corrected reading. The remote verdict overrides the
    /// local threshold policy.
    pub fn ingest_remote(&mut self, reading: TelemetryReading, verdict: RemoteVerdict) -> Snapshot {
        self.apply(reading, Some(verdict), LinkStatus::Connected)
    }

    fn apply(
        &mut self,
        reading: TelemetryReading,
        verdict: Option<RemoteVerdict>,
        link: LinkStatus,
    ) -> Snapshot {
        self.temperature.push(reading.temperature);
        self.voltage.push(reading.voltage);
        self.pressure.push(reading.pressure);
        self.tick += 1;

        let anomaly = match verdict {
            Some(v) => AnomalyState {
                is_anomaly: v.is_anomaly,
                score: v.score,
                confidence: confidence_for(v.is_anomaly),
            },
            None => {
                let is_anomaly = reading.temperature > self.threshold_celsius;
                AnomalyState {
                    is_anomaly,
                    score: reading.temperature - self.threshold_celsius,
                    confidence: confidence_for(is_anomaly),
                }
            }
        };

        let stats = WindowStats {
            temperature_max: self.temperature.max(),
            voltage_min: self.voltage.min(),
            pressure_mean: self.pressure.mean(),
        };

        Snapshot {
            reading,
            temperature_history: self.temperature.values(),
            voltage_history: self.voltage.values(),
            pressure_history: self.pressure.values(),
            anomaly,
            stats,
            link,
            clock: Utc::now(),
            tick: self.tick,
        }
    }
}

fn confidence_for(is_anomaly: bool) -> f64 {
    if is_anomaly {
        ANOMALY_CONFIDENCE
    } else {
        NORMAL_CONFIDENCE
    }
}
