//! Simulated-annealing solver for the N-Queens problem.
//!
//! Boards are permutations: row `i` holds one queen in column
//! `cols[i]`, so row and column clashes are impossible and only
//! diagonal conflicts remain. The [`energy`] of a board counts ordered
//! attacking pairs (twice per unordered pair), the neighborhood move is
//! a random swap of two rows, and a geometric schedule cools the
//! Metropolis acceptance rule until the search freezes or a zero-energy
//! board appears.
//!
//! # Quick Start
//!
//! ```
//! use nqueens_anneal::{AnnealingConfig, AnnealingRunner};
//!
//! let config = AnnealingConfig::new()
//!     .with_board_size(8)
//!     .with_cooling_rate(0.999)
//!     .with_seed(42);
//! let result = AnnealingRunner::new(config).run()?;
//!
//! println!("{}", result.board);
//! println!(
//!     "energy {} after {} steps ({} accepted moves)",
//!     result.energy, result.step, result.accepted_moves
//! );
//! # Ok::<(), nqueens_anneal::Error>(())
//! ```
//!
//! One-off runs can skip the configuration type:
//!
//! ```
//! use nqueens_anneal::run_annealing;
//!
//! let result = run_annealing(8, 100.0, 1e-6, 0.95, 10_000)?;
//! assert!(result.step <= 10_001);
//! # Ok::<(), nqueens_anneal::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for boards, configurations, and
//!   results.
//! - `wasm`: JavaScript bindings via `wasm-bindgen` (implies `serde`).
//!
//! # References
//!
//! - Kirkpatrick, Gelatt, Vecchi (1983), "Optimization by Simulated
//!   Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

pub mod acceptance;
pub mod board;
pub mod config;
pub mod energy;
pub mod error;
pub mod neighbor;
pub mod runner;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use board::Board;
pub use config::AnnealingConfig;
pub use energy::energy;
pub use error::{Error, Result};
pub use neighbor::swap_neighbor;
pub use runner::{run_annealing, AnnealingResult, AnnealingRunner};
