//! Simulated-annealing search loop.
//!
//! Starts from the identity board, proposes random row swaps, accepts
//! them by the Metropolis criterion, and cools the temperature
//! geometrically until a conflict-free board turns up, the temperature
//! falls to the floor, or the iteration budget runs out. The best board
//! seen along the way is returned even when the walk ends elsewhere.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::acceptance;
use crate::board::Board;
use crate::config::AnnealingConfig;
use crate::energy::energy;
use crate::error::Result;
use crate::neighbor::swap_neighbor;

/// Steps between samples appended to [`AnnealingResult::energy_history`].
const HISTORY_INTERVAL: usize = 100;

/// Outcome of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnealingResult {
    /// Best board found during the run.
    pub board: Board,
    /// Conflict count of [`AnnealingResult::board`]. Zero means every
    /// queen is safe.
    pub energy: usize,
    /// Temperature at the moment the run stopped.
    pub temperature: f64,
    /// Number of iterations executed. At most `max_iterations + 1`,
    /// since the counter starts at 0 and is checked inclusively.
    pub step: usize,
    /// Candidates the walk moved to, improving or otherwise.
    pub accepted_moves: usize,
    /// Candidates that strictly lowered the energy.
    pub improving_moves: usize,
    /// Best energy sampled every [`HISTORY_INTERVAL`] steps, starting
    /// with the initial board's energy and ending with the final best.
    pub energy_history: Vec<usize>,
}

impl AnnealingResult {
    /// Returns `true` when the board places all queens without conflicts.
    pub fn is_solved(&self) -> bool {
        self.energy == 0
    }
}

/// Runs the annealing search described by an [`AnnealingConfig`].
///
/// # Example
///
/// ```
/// use nqueens_anneal::{AnnealingConfig, AnnealingRunner};
///
/// let config = AnnealingConfig::new().with_board_size(8).with_seed(42);
/// let result = AnnealingRunner::new(config).run()?;
///
/// assert_eq!(result.board.len(), 8);
/// # Ok::<(), nqueens_anneal::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingRunner {
    config: AnnealingConfig,
}

impl AnnealingRunner {
    /// Creates a runner for the given configuration.
    pub fn new(config: AnnealingConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration the runner was built with.
    pub fn config(&self) -> &AnnealingConfig {
        &self.config
    }

    /// Executes the search and returns the best board found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// when the configuration fails [`AnnealingConfig::validate`]. The
    /// search itself cannot fail: an unsolved run still yields the best
    /// board it reached.
    pub fn run(&self) -> Result<AnnealingResult> {
        self.config.validate()?;

        let config = &self.config;
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));

        let mut current = Board::identity(config.board_size);
        let mut current_energy = energy(&current);
        let mut energy_history = vec![current_energy];

        if current_energy == 0 {
            log::debug!("board of size {} starts without conflicts", config.board_size);
            return Ok(AnnealingResult {
                board: current,
                energy: 0,
                temperature: config.initial_temperature,
                step: 0,
                accepted_moves: 0,
                improving_moves: 0,
                energy_history,
            });
        }

        let mut best = current.clone();
        let mut best_energy = current_energy;
        let mut temperature = config.initial_temperature;
        let mut step = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while step <= config.max_iterations && temperature > config.min_temperature {
            let candidate = swap_neighbor(&current, &mut rng);
            let candidate_energy = energy(&candidate);

            if candidate_energy == 0 {
                energy_history.push(0);
                log::debug!(
                    "solved {}-queens at step {}",
                    config.board_size,
                    step + 1
                );
                return Ok(AnnealingResult {
                    board: candidate,
                    energy: 0,
                    temperature: temperature * config.cooling_rate,
                    step: step + 1,
                    accepted_moves: accepted_moves + 1,
                    improving_moves: improving_moves + 1,
                    energy_history,
                });
            }

            let ds = candidate_energy as i64 - current_energy as i64;
            if ds < 0 {
                improving_moves += 1;
            }
            // Ties go to the newest candidate, so the returned board is
            // the latest one matching the best energy.
            if candidate_energy <= best_energy {
                best = candidate.clone();
                best_energy = candidate_energy;
            }
            if acceptance::accepts(ds, temperature, &mut rng) {
                current = candidate;
                current_energy = candidate_energy;
                accepted_moves += 1;
            }

            temperature *= config.cooling_rate;
            step += 1;

            if step.is_multiple_of(HISTORY_INTERVAL) {
                energy_history.push(best_energy);
                log::trace!(
                    "step {step}: temperature {temperature:.6}, current energy {current_energy}, best energy {best_energy}"
                );
            }
        }

        if energy_history.last() != Some(&best_energy) {
            energy_history.push(best_energy);
        }
        log::debug!(
            "annealing stopped at step {step} with best energy {best_energy} (temperature {temperature:.3e})"
        );
        Ok(AnnealingResult {
            board: best,
            energy: best_energy,
            temperature,
            step,
            accepted_moves,
            improving_moves,
            energy_history,
        })
    }
}

/// Runs the search with explicit parameters and an entropy-seeded RNG.
///
/// Convenience wrapper over [`AnnealingRunner`] for callers that do not
/// need seeding or a reusable configuration.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
/// when the parameters fail validation.
pub fn run_annealing(
    board_size: usize,
    initial_temperature: f64,
    min_temperature: f64,
    cooling_rate: f64,
    max_iterations: usize,
) -> Result<AnnealingResult> {
    let config = AnnealingConfig::new()
        .with_board_size(board_size)
        .with_initial_temperature(initial_temperature)
        .with_min_temperature(min_temperature)
        .with_cooling_rate(cooling_rate)
        .with_max_iterations(max_iterations);
    AnnealingRunner::new(config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;

    fn seeded_config(seed: u64) -> AnnealingConfig {
        AnnealingConfig::new().with_seed(seed)
    }

    #[test]
    fn test_seeded_run_is_deterministic() {
        let first = AnnealingRunner::new(seeded_config(42)).run().unwrap();
        let second = AnnealingRunner::new(seeded_config(42)).run().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let first = AnnealingRunner::new(seeded_config(1)).run().unwrap();
        let second = AnnealingRunner::new(seeded_config(2)).run().unwrap();
        // Identical full trajectories from different seeds would point at
        // a wiring bug, even though equal final energies are plausible.
        assert!(
            first.board != second.board
                || first.step != second.step
                || first.energy_history != second.energy_history
        );
    }

    #[test]
    fn test_result_board_is_permutation() {
        let result = AnnealingRunner::new(seeded_config(7)).run().unwrap();
        assert_eq!(result.board.len(), 8);
        assert!(result.board.is_permutation());
    }

    #[test]
    fn test_result_energy_matches_board() {
        for seed in [0, 3, 11, 99] {
            let result = AnnealingRunner::new(seeded_config(seed)).run().unwrap();
            assert_eq!(energy(&result.board), result.energy);
        }
    }

    #[test]
    fn test_temperature_follows_geometric_schedule() {
        for (seed, rate) in [(3u64, 0.95f64), (4, 0.999), (5, 0.8)] {
            let config = seeded_config(seed).with_cooling_rate(rate);
            let result = AnnealingRunner::new(config).run().unwrap();
            let expected = 100.0 * rate.powi(result.step as i32);
            let relative = ((result.temperature - expected) / expected).abs();
            assert!(
                relative < 1e-9,
                "temperature {} drifted from schedule value {}",
                result.temperature,
                expected
            );
        }
    }

    #[test]
    fn test_step_stays_within_budget() {
        for max_iterations in [0, 1, 50, 10_000] {
            let config = seeded_config(9).with_max_iterations(max_iterations);
            let result = AnnealingRunner::new(config).run().unwrap();
            assert!(result.step <= max_iterations + 1);
        }
    }

    #[test]
    fn test_run_stops_for_a_reason() {
        for seed in [0, 1, 2] {
            let config = seeded_config(seed);
            let result = AnnealingRunner::new(config.clone()).run().unwrap();
            let exhausted_steps = result.step == config.max_iterations + 1;
            let frozen = result.temperature <= config.min_temperature;
            assert!(result.is_solved() || exhausted_steps || frozen);
        }
    }

    #[test]
    fn test_history_starts_at_initial_energy_and_never_increases() {
        let result = AnnealingRunner::new(seeded_config(21)).run().unwrap();
        assert_eq!(result.energy_history[0], 56);
        for pair in result.energy_history.windows(2) {
            assert!(pair[1] <= pair[0], "history increased: {:?}", result.energy_history);
        }
        assert_eq!(*result.energy_history.last().unwrap(), result.energy);
    }

    #[test]
    fn test_move_counters_are_consistent() {
        let result = AnnealingRunner::new(seeded_config(13)).run().unwrap();
        assert!(result.improving_moves <= result.accepted_moves);
        assert!(result.accepted_moves <= result.step);
    }

    #[test]
    fn test_single_queen_solves_without_search() {
        let config = AnnealingConfig::new().with_board_size(1);
        let result = AnnealingRunner::new(config).run().unwrap();
        assert!(result.is_solved());
        assert_eq!(result.step, 0);
        assert_eq!(result.temperature, 100.0);
        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.energy_history, vec![0]);
    }

    #[test]
    fn test_two_queens_cool_out_unsolved() {
        // Both placements on a 2x2 board leave the queens on a shared
        // diagonal, so the run must exhaust the temperature. The default
        // schedule crosses the 1e-6 floor after exactly 360 coolings.
        let config = seeded_config(5).with_board_size(2);
        let result = AnnealingRunner::new(config).run().unwrap();
        assert!(!result.is_solved());
        assert_eq!(result.energy, 2);
        assert_eq!(result.step, 360);
        assert!(result.temperature <= 1e-6);
    }

    #[test]
    fn test_three_queens_reach_best_possible_energy() {
        // No 3-queens placement is conflict-free; the best has a single
        // attacking pair.
        let config = seeded_config(6).with_board_size(3);
        let result = AnnealingRunner::new(config).run().unwrap();
        assert!(!result.is_solved());
        assert_eq!(result.energy, 2);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AnnealingConfig::new().with_board_size(0);
        assert!(matches!(
            AnnealingRunner::new(config).run(),
            Err(Error::InvalidConfiguration(_))
        ));

        let config = AnnealingConfig::new().with_cooling_rate(1.5);
        assert!(matches!(
            AnnealingRunner::new(config).run(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_slow_cooling_solves_eight_queens_reliably() {
        // With cooling_rate 0.999 the iteration budget binds and each run
        // gets the full 10_001 steps, enough to solve most of the time.
        let solved = (0..30)
            .filter(|&seed| {
                let config = seeded_config(seed).with_cooling_rate(0.999);
                AnnealingRunner::new(config).run().unwrap().is_solved()
            })
            .count();
        assert!(solved >= 12, "only {solved}/30 slow-cooling runs solved");
    }

    #[test]
    fn test_default_schedule_can_solve() {
        // The default schedule freezes after ~360 steps, so any single
        // run may miss; across 50 entropy-seeded runs at least one hit
        // is overwhelmingly likely.
        let solved = (0..50)
            .filter(|_| {
                let result = AnnealingRunner::new(AnnealingConfig::new()).run().unwrap();
                assert!(result.board.is_permutation());
                result.is_solved()
            })
            .count();
        assert!(solved >= 1, "no default-schedule run solved 8-queens");
    }

    #[test]
    fn test_run_annealing_matches_config_form() {
        let result = run_annealing(8, 100.0, 1e-6, 0.95, 10_000).unwrap();
        assert_eq!(result.board.len(), 8);
        assert!(result.board.is_permutation());
        assert_eq!(energy(&result.board), result.energy);
        assert!(result.step <= 10_001);
    }

    #[test]
    fn test_run_annealing_rejects_bad_parameters() {
        assert!(run_annealing(0, 100.0, 1e-6, 0.95, 10_000).is_err());
        assert!(run_annealing(8, 100.0, 1e-6, 0.0, 10_000).is_err());
        assert!(run_annealing(8, 1e-9, 1e-6, 0.95, 10_000).is_err());
    }

    proptest! {
        #[test]
        fn prop_run_upholds_result_invariants(
            board_size in 1usize..12,
            cooling_rate in 0.5f64..0.99,
            max_iterations in 0usize..500,
            seed in any::<u64>(),
        ) {
            let config = AnnealingConfig::new()
                .with_board_size(board_size)
                .with_cooling_rate(cooling_rate)
                .with_max_iterations(max_iterations)
                .with_seed(seed);
            let result = AnnealingRunner::new(config.clone()).run().unwrap();

            prop_assert!(result.board.is_permutation());
            prop_assert_eq!(energy(&result.board), result.energy);
            prop_assert!(result.step <= max_iterations + 1);
            prop_assert!(
                result.is_solved()
                    || result.step == max_iterations + 1
                    || result.temperature <= config.min_temperature
            );
            for pair in result.energy_history.windows(2) {
                prop_assert!(pair[1] <= pair[0]);
            }
        }
    }
}
