//! Metrics module - timing instrumentation for the sampling pipeline

use hdrhistogram::Histogram;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// TIMING METRICS - Thread-safe performance tracking
// ============================================================================

#[derive(Clone)]
pub struct TimingMetrics {
    generation_hist: Arc<Mutex<Histogram<u64>>>,
    processing_hist: Arc<Mutex<Histogram<u64>>>,
    e2e_hist: Arc<Mutex<Histogram<u64>>>,
    ticks: Arc<AtomicU64>,
    failed_requests: Arc<AtomicU64>,
}

impl TimingMetrics {
    pub fn new() -> Self {
        Self {
            generation_hist: Arc::new(Mutex::new(Histogram::new(3).unwrap())),
            processing_hist: Arc::new(Mutex::new(Histogram::new(3).unwrap())),
            e2e_hist: Arc::new(Mutex::new(Histogram::new(3).unwrap())),
            ticks: Arc::new(AtomicU64::new(0)),
            failed_requests: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Time spent producing a reading (includes the remote round-trip in
    /// remote mode).
    pub fn record_generation(&self, duration: Duration) {
        self.generation_hist.lock().record(duration.as_nanos() as u64).ok();
    }

    /// Time spent in ingest and snapshot derivation.
    pub fn record_processing(&self, duration: Duration) {
        self.processing_hist.lock().record(duration.as_nanos() as u64).ok();
    }

    /// Whole-tick latency, sample to published snapshot.
    pub fn record_e2e(&self, duration: Duration) {
        self.e2e_hist.lock().record(duration.as_nanos() as u64).ok();
    }

    pub fn record_tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed_request(&self) {
        self.failed_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn report(&self) -> MetricsReport {
        let gen = self.generation_hist.lock();
        let proc = self.processing_hist.lock();
        let e2e = self.e2e_hist.lock();

        MetricsReport {
            generation_p50: Duration::from_nanos(gen.value_at_quantile(0.5)),
            generation_p99: Duration::from_nanos(gen.value_at_quantile(0.99)),
            processing_p50: Duration::from_nanos(proc.value_at_quantile(0.5)),
            processing_p99: Duration::from_nanos(proc.value_at_quantile(0.99)),
            e2e_p50: Duration::from_nanos(e2e.value_at_quantile(0.5)),
            e2e_p99: Duration::from_nanos(e2e.value_at_quantile(0.99)),
            ticks: self.ticks.load(Ordering::Relaxed),
            failed_requests: self.failed_requests.load(Ordering::Relaxed),
        }
    }
}

impl Default for TimingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// METRICS REPORT - Summary statistics
// ============================================================================

#[derive(Debug)]
pub struct MetricsReport {
    pub generation_p50: Duration,
    pub generation_p99: Duration,
    pub processing_p50: Duration,
    pub processing_p99: Duration,
    pub e2e_p50: Duration,
    pub e2e_p99: Duration,
    pub ticks: u64,
    pub failed_requests: u64,
}
