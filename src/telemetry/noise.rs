use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform noise in `[0, 1)`.
///
/// The sampler takes its randomness through this trait so tests can supply
/// deterministic sequences instead of a live PRNG.
pub trait NoiseSource: Send {
    fn next_noise(&mut self) -> f64;
}

/// Seeded PRNG noise for production sampling.
pub struct StdNoise {
    rng: StdRng,
}

impl StdNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NoiseSource for StdNoise {
    fn next_noise(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Replays a fixed sequence of noise values, cycling once exhausted.
pub struct FixedNoise {
    values: Vec<f64>,
    index: usize,
}

impl FixedNoise {
    /// `values` must be non-empty and each value in `[0, 1)`.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "FixedNoise needs at least one value");
        Self { values, index: 0 }
    }
}

impl NoiseSource for FixedNoise {
    fn next_noise(&mut self) -> f64 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}
