/// Port for the simulation's source of randomness
///
/// Constructed once per run and handed to the simulation explicitly, so a run
/// can be replayed exactly by injecting the same source:
/// - Seeded pseudo-random generator for normal runs
/// - Scripted sequence of draws for deterministic tests
pub trait RandomSource {
    /// Draw one sample from a normal distribution `N(mean, std_dev)`
    fn sample(&mut self, mean: f64, std_dev: f64) -> f64;

    /// Get the source's name/identifier for debugging
    fn name(&self) -> &str {
        "RandomSource"
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn sample(&mut self, mean: f64, std_dev: f64) -> f64 {
        (**self).sample(mean, std_dev)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn sample(&mut self, mean: f64, std_dev: f64) -> f64 {
        (**self).sample(mean, std_dev)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
