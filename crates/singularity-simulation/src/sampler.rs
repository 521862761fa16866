//! Source of uniform random draws
//!
//! The double slit session draws initial velocities, deflections and
//! interference acceptance from a [`UniformSource`] so that tests can swap in
//! a seeded generator or a fixed script.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces uniform samples in `[0, 1)`
pub trait UniformSource {
    fn next_unit(&mut self) -> f32;
}

impl UniformSource for StdRng {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded generator for reproducible runs
pub fn seeded_source(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the thread-local entropy source
pub fn entropy_source() -> StdRng {
    StdRng::seed_from_u64(rand::rng().random::<u64>())
}

/// Replays a fixed list of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    samples: Vec<f32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(samples: impl Into<Vec<f32>>) -> Self {
        Self {
            samples: samples.into(),
            cursor: 0,
        }
    }

    /// Always returns `value`
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl UniformSource for ScriptedSource {
    fn next_unit(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_cycles() {
        let mut source = ScriptedSource::new([0.1, 0.9]);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.next_unit(), 0.9);
        assert_eq!(source.next_unit(), 0.1);
    }

    #[test]
    fn test_seeded_is_reproducible_and_in_range() {
        let mut a = seeded_source(42);
        let mut b = seeded_source(42);
        for _ in 0..100 {
            let value = a.next_unit();
            assert_eq!(value, b.next_unit());
            assert!((0.0..1.0).contains(&value));
        }
    }
}
