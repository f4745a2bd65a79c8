//! Random sources
//!
//! - [`SeededNormal`]: pseudo-random normal draws from a seedable generator
//! - [`ScriptedSource`]: replays a fixed list of draws, for tests and replays

use mmsim_ports::RandomSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

/// Normal draws from a `StdRng`
///
/// Two sources built from the same seed produce identical sequences.
pub struct SeededNormal {
    rng: StdRng,
    seed: Option<u64>,
}

impl SeededNormal {
    /// Create with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create from OS entropy (not reproducible)
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Fixed seed when given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RandomSource for SeededNormal {
    fn sample(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        mean + std_dev * z
    }

    fn name(&self) -> &str {
        "SeededNormal"
    }
}

/// Replays a fixed sequence of samples, ignoring the requested distribution
///
/// The sequence cycles once exhausted. An empty script always returns `mean`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, cursor: 0 }
    }

    /// Every draw is exactly the mean
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Number of samples handed out so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn sample(&mut self, mean: f64, _std_dev: f64) -> f64 {
        if self.samples.is_empty() {
            self.cursor += 1;
            return mean;
        }
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }

    fn name(&self) -> &str {
        "ScriptedSource"
    }
}
