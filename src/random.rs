use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Errors from the random selection helpers
#[derive(Debug)]
pub enum RandomError {
    /// The lower bound of a range draw was above the upper bound
    InvertedRange { min: i64, max: i64 },
    /// A pick was requested from an empty pool
    EmptyPool,
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomError::InvertedRange { min, max } => {
                write!(f, "Lower bound {} is above upper bound {}", min, max)
            }
            RandomError::EmptyPool => write!(f, "Cannot pick from an empty pool"),
        }
    }
}

/// Process-wide source of pseudo-randomness for the UI helpers.
///
/// The host creates one instance at startup and passes it by mutable
/// reference to whatever needs a draw; tests build a seeded instance for
/// reproducible sequences.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// A source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A deterministic source. Two sources built with the same seed yield
    /// the same sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A uniformly distributed integer between `min` and `max`, both
    /// bounds included. A range with `min > max` is rejected rather than
    /// swapped.
    pub fn int_in_range(&mut self, min: i64, max: i64) -> Result<i64, RandomError> {
        if min > max {
            tracing::warn!("random range is inverted: {} > {}", min, max);
            return Err(RandomError::InvertedRange { min, max });
        }
        Ok(self.rng.gen_range(min..=max))
    }

    /// One element chosen uniformly from `items`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RandomError> {
        match items.choose(&mut self.rng) {
            Some(item) => Ok(item),
            None => {
                tracing::warn!("random pick requested from an empty pool");
                Err(RandomError::EmptyPool)
            }
        }
    }
}
