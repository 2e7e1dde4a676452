//! History module - bounded FIFO windows and summary statistics

use std::collections::VecDeque;

/// Default number of recent values kept per metric (observed variants 5-20).
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Bounded FIFO window of recent metric values.
///
/// Invariants: `len() <= capacity()`, the oldest value is evicted first on
/// overflow, and iteration order is chronological. A capacity of at least 1
/// is assumed; the configuration layer rejects anything smaller.
#[derive(Debug, Clone)]
pub struct HistoryWindow {
    capacity: usize,
    values: VecDeque<f64>,
}

impl HistoryWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            values: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a value, evicting the oldest entry when the window is full.
    pub fn push(&mut self, value: f64) {
        self.values.push_back(value);
        if self.values.len() > self.capacity {
            self.values.pop_front();
        }
    }

    /// Change the capacity, truncating from the front so that only the most
    /// recent entries survive a shrink.
    pub fn resize(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.values.len() > self.capacity {
            self.values.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Chronological copy of the window contents. Callers never get a view
    /// into the internal buffer.
    pub fn values(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }

    /// Largest value in the window, 0 when empty.
    pub fn max(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        }
    }

    /// Smallest value in the window, 0 when empty.
    pub fn min(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.values.iter().copied().fold(f64::INFINITY, f64::min)
        }
    }

    /// Arithmetic mean of the window. The mean of an empty window is defined
    /// as 0, not NaN, to keep display-layer contracts total.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.values.iter().sum::<f64>() / self.values.len() as f64
        }
    }
}
