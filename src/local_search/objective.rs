//! Objective functions for the exchange local search.

use rand::Rng;

use crate::models::Solution;

/// Probability of sampling the balanced objective in each outer iteration.
pub const BALANCED_PROBABILITY: f64 = 0.75;

/// Keeps the imbalanced objective finite when a station is filled to
/// exactly the cycle time.
const EPSILON: f64 = 0.001;

/// One of two competing views on how station load should be distributed.
///
/// The balanced objective rewards evenly loaded stations; the imbalanced
/// objective rewards concentrating slack in few stations and is sampled
/// occasionally to escape balanced local optima. [`Objective::variation`]
/// folds both into one sign convention: negative variation always means
/// the modified solution is better under the sampled objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Minimize `Σ (station_time / cycle_time)²`.
    Balanced,
    /// Maximize `Σ 1 / (cycle_time - station_time + ε)`.
    Imbalanced,
}

impl Objective {
    /// Samples an objective: balanced with probability
    /// `balanced_probability`, imbalanced otherwise.
    pub fn sample<R: Rng>(balanced_probability: f64, rng: &mut R) -> Self {
        if rng.random::<f64>() <= balanced_probability {
            Objective::Balanced
        } else {
            Objective::Imbalanced
        }
    }

    /// Evaluates the objective over all stations of `solution`.
    pub fn value(&self, solution: &Solution) -> f64 {
        match self {
            Objective::Balanced => solution
                .stations()
                .iter()
                .map(|s| {
                    let load = f64::from(s.station_time()) / f64::from(s.cycle_time());
                    load * load
                })
                .sum(),
            Objective::Imbalanced => solution
                .stations()
                .iter()
                .map(|s| {
                    let slack = f64::from(s.cycle_time()) - f64::from(s.station_time());
                    1.0 / (slack + EPSILON)
                })
                .sum(),
        }
    }

    /// Signed improvement of `modified` over `current`; negative means the
    /// exchange improved the solution regardless of which objective is
    /// being minimized or maximized.
    pub fn variation(&self, current: f64, modified: f64) -> f64 {
        match self {
            Objective::Balanced => modified - current,
            Objective::Imbalanced => current - modified,
        }
    }
}
