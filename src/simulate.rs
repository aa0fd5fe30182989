//! Generates synthetic crash game rounds.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Pareto};

use crate::error::{PredictorError, Result};

/// An endless stream of crash multipliers. The values follow a Pareto tail
/// starting at 1.0, so P(x > m) is about 1/m, and are rounded down to two
/// decimals the way a game displays them.
pub struct CrashRounds {
    rng: StdRng,
    dist: Pareto<f64>,
}

impl CrashRounds {
    pub fn new(seed: u64) -> Result<Self> {
        let dist = Pareto::new(1.0, 1.0)
            .map_err(|err| PredictorError::Distribution(err.to_string()))?;
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            dist,
        })
    }
}

impl Iterator for CrashRounds {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = self.dist.sample(&mut self.rng);
        Some((value * 100.0).floor() / 100.0)
    }
}
