//! Annealing schedule and problem-size parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters controlling the annealing run.
///
/// # Defaults
///
/// | Parameter             | Value   |
/// |-----------------------|---------|
/// | `board_size`          | 8       |
/// | `initial_temperature` | 100.0   |
/// | `min_temperature`     | 1e-6    |
/// | `cooling_rate`        | 0.95    |
/// | `max_iterations`      | 10 000  |
/// | `seed`                | `None`  |
///
/// # Builder Pattern
///
/// ```
/// use nqueens_anneal::AnnealingConfig;
///
/// let config = AnnealingConfig::new()
///     .with_board_size(16)
///     .with_cooling_rate(0.99)
///     .with_seed(42);
///
/// assert_eq!(config.board_size, 16);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnealingConfig {
    /// Number of rows (and queens) on the board.
    pub board_size: usize,
    /// Temperature at step 0.
    pub initial_temperature: f64,
    /// Temperature floor. Cooling below this value stops the search.
    pub min_temperature: f64,
    /// Geometric cooling factor applied once per iteration. Must lie in
    /// the open interval (0, 1).
    pub cooling_rate: f64,
    /// Iteration budget. The loop body runs at most `max_iterations + 1`
    /// times: the counter starts at 0 and is checked with `<=` before
    /// each iteration.
    pub max_iterations: usize,
    /// Seed for the random number generator. `None` seeds from entropy,
    /// so repeated runs explore different trajectories.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            initial_temperature: 100.0,
            min_temperature: 1e-6,
            cooling_rate: 0.95,
            max_iterations: 10_000,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    /// Creates a configuration with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Sets the initial temperature.
    pub fn with_initial_temperature(mut self, initial_temperature: f64) -> Self {
        self.initial_temperature = initial_temperature;
        self
    }

    /// Sets the temperature floor.
    pub fn with_min_temperature(mut self, min_temperature: f64) -> Self {
        self.min_temperature = min_temperature;
        self
    }

    /// Sets the geometric cooling factor.
    pub fn with_cooling_rate(mut self, cooling_rate: f64) -> Self {
        self.cooling_rate = cooling_rate;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the parameters for consistency.
    ///
    /// Rejects an empty board, a cooling rate outside (0, 1), a negative
    /// temperature floor, and an initial temperature at or below the
    /// floor. The comparisons are written so `NaN` fails them too.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(Error::InvalidConfiguration(
                "board_size must be at least 1".into(),
            ));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(Error::InvalidConfiguration(format!(
                "cooling_rate must lie in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if !(self.min_temperature >= 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "min_temperature must be non-negative, got {}",
                self.min_temperature
            )));
        }
        if !(self.initial_temperature > self.min_temperature) {
            return Err(Error::InvalidConfiguration(format!(
                "initial_temperature ({}) must exceed min_temperature ({})",
                self.initial_temperature, self.min_temperature
            )));
        }
        Ok(())
    }
}
