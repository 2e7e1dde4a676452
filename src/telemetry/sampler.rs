use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use log::warn;
use parking_lot::Mutex;

use super::noise::{NoiseSource, StdNoise};
use super::{LinkStatus, TelemetryReading};
use crate::evaluator::RemoteVerdict;
use crate::predictor::{PredictRequest, PredictorClient};

// ============================================================================
// LOCAL SAMPLER - Simulated satellite readings
// ============================================================================

/// Produces simulated readings with additive uniform noise on each channel.
///
/// Safe to share: the noise source sits behind a mutex that is only held for
/// the duration of one synchronous `generate` call.
pub struct LocalSampler {
    noise: Mutex<Box<dyn NoiseSource>>,
    sequence: AtomicU64,
    pub base_temperature: f64,
    pub temperature_span: f64,
    pub base_voltage: f64,
    pub voltage_span: f64,
    pub base_pressure: f64,
    pub pressure_span: f64,
}

impl LocalSampler {
    pub fn new(seed: u64) -> Self {
        Self::with_noise(Box::new(StdNoise::new(seed)))
    }

    pub fn with_noise(noise: Box<dyn NoiseSource>) -> Self {
        Self {
            noise: Mutex::new(noise),
            sequence: AtomicU64::new(0),
            base_temperature: 65.0,
            temperature_span: 20.0,
            base_voltage: 3.0,
            voltage_span: 0.5,
            base_pressure: 380.0,
            pressure_span: 40.0,
        }
    }

    /// Generate the next simulated reading. Never fails.
    pub fn generate(&self) -> TelemetryReading {
        let sequence_id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let (t, v, p) = {
            let mut noise = self.noise.lock();
            (noise.next_noise(), noise.next_noise(), noise.next_noise())
        };

        TelemetryReading {
            timestamp: Utc::now(),
            temperature: self.base_temperature + t * self.temperature_span,
            voltage: self.base_voltage + v * self.voltage_span,
            pressure: self.base_pressure + p * self.pressure_span,
            sequence_id,
        }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence.load(Ordering::Relaxed)
    }
}

// ============================================================================
// SAMPLER - One interface, two strategies
// ============================================================================

/// Result of one sampling tick.
///
/// `reading` is `None` only when the remote strategy failed for this tick;
/// the caller keeps the previous snapshot and retries on the next tick.
pub struct SampleOutcome {
    pub reading: Option<TelemetryReading>,
    pub verdict: Option<RemoteVerdict>,
    pub link: LinkStatus,
}

/// Sampling strategy, selected once from configuration.
pub enum Sampler {
    /// Local pseudo-random simulation; never fails.
    Local(LocalSampler),
    /// Locally simulated draft sent to a remote predictor for correction.
    Remote(LocalSampler, PredictorClient),
}

impl Sampler {
    /// Produce one reading.
    ///
    /// The remote strategy makes a single attempt per tick; the next tick is
    /// the retry. Transport and API failures are logged and reported as a
    /// disconnected outcome, never propagated.
    pub async fn sample(&self, satellite_id: &str) -> SampleOutcome {
        match self {
            Sampler::Local(local) => SampleOutcome {
                reading: Some(local.generate()),
                verdict: None,
                link: LinkStatus::Simulating,
            },
            Sampler::Remote(local, client) => {
                let draft = local.generate();
                let request = PredictRequest::from_reading(satellite_id, &draft);

                match client.predict(&request).await {
                    Ok(response) => {
                        let corrected = TelemetryReading {
                            temperature: response.temperature,
                            voltage: response.voltage,
                            // remote "altitude" feeds the pressure channel
                            pressure: response.altitude,
                            ..draft
                        };
                        SampleOutcome {
                            reading: Some(corrected),
                            verdict: Some(RemoteVerdict {
                                is_anomaly: response.is_anomaly,
                                score: response.anomaly_score,
                            }),
                            link: LinkStatus::Connected,
                        }
                    }
                    Err(err) => {
                        warn!("remote predictor unavailable: {err}");
                        SampleOutcome {
                            reading: None,
                            verdict: None,
                            link: LinkStatus::Disconnected,
                        }
                    }
                }
            }
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Sampler::Remote(..))
    }
}
