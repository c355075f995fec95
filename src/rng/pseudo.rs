//! Pseudo-random sources
//!
//! `ThreadRandom` uses the `rand` crate's thread-local RNG for normal play.
//! `SeededRandom` wraps a seeded `StdRng` for reproducible games and tests.

use crate::rng::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Thread-local pseudo-random source
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Create a new thread-local source
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn name(&self) -> &'static str {
        "thread"
    }

    fn float(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn index(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Seeded pseudo-random source for deterministic play
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a new seeded source
    ///
    /// Using the same seed will produce the same sequence of random values.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn float(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_floats_in_range() {
        let mut source = ThreadRandom::new();
        for _ in 0..1000 {
            let f = source.float();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn test_seeded_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);

        let xs: Vec<f64> = (0..100).map(|_| a.float()).collect();
        let ys: Vec<f64> = (0..100).map(|_| b.float()).collect();

        assert_eq!(xs, ys);
    }

    #[test]
    fn test_seeded_index_in_range() {
        let mut source = SeededRandom::new(12345);
        for upper in 1..10 {
            for _ in 0..100 {
                assert!(source.index(upper) < upper);
            }
        }
    }
}
