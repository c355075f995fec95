//! Random sources
//!
//! Pin placement and option shuffling draw from a `RandomSource` rather than
//! calling `rand` directly, so a game can be replayed from a seed.

pub mod pseudo;

pub use pseudo::{SeededRandom, ThreadRandom};

/// Trait for uniform random sources
pub trait RandomSource {
    /// Returns the source name (e.g., "thread", "seeded")
    fn name(&self) -> &'static str;

    /// Generate a float uniformly distributed in [0.0, 1.0)
    fn float(&mut self) -> f64;

    /// Generate an index uniformly distributed in [0, upper)
    ///
    /// `upper` must be non-zero. Default implementation scales `float()`.
    fn index(&mut self, upper: usize) -> usize {
        let i = (self.float() * upper as f64) as usize;
        i.min(upper.saturating_sub(1))
    }

    /// Generate a float uniformly distributed in [low, high]
    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + self.float() * (high - low)
    }
}

/// Get a random source, seeded when a seed is given
pub fn get_source(seed: Option<u64>) -> Box<dyn RandomSource + Send> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn float(&mut self) -> f64 {
        (**self).float()
    }

    fn index(&mut self, upper: usize) -> usize {
        (**self).index(upper)
    }

    fn range(&mut self, low: f64, high: f64) -> f64 {
        (**self).range(low, high)
    }
}
