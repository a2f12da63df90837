//! Permutation-based board representation.
//!
//! A board of size `n` holds one queen per row; index = row, value =
//! column. The solver only ever produces permutations of `0..n`, so no two
//! queens share a row or a column by construction. The only conflicts a
//! board can carry are diagonal ones, which is exactly what
//! [`energy`](crate::energy::energy) measures.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Queen placement, one queen per row.
///
/// Boards are immutable after creation: neighbor generation and the
/// annealing loop allocate a new `Board` rather than mutating a retained
/// one. With the `serde` feature a board serializes transparently as the
/// array of column indices.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Board {
    cols: Vec<usize>,
}

impl Board {
    /// Creates a board from explicit column assignments: `cols[row]` is
    /// the column of the queen in `row`.
    ///
    /// The annealing loop only deals in permutations of `0..n`, but the
    /// constructor accepts any assignment so that arbitrary placements can
    /// be evaluated.
    pub fn new(cols: Vec<usize>) -> Self {
        Self { cols }
    }

    /// Creates the identity board `[0, 1, …, n-1]`: the queen of row `i`
    /// stands in column `i`. This is the starting point of every run.
    pub fn identity(n: usize) -> Self {
        Self {
            cols: (0..n).collect(),
        }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.cols.len()
    }

    /// Returns `true` for the zero-sized board.
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Column of the queen in `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn queen_col(&self, row: usize) -> usize {
        self.cols[row]
    }

    /// Column assignments, row by row.
    pub fn as_slice(&self) -> &[usize] {
        &self.cols
    }

    /// Returns `true` if the column values form a permutation of `0..n`.
    pub fn is_permutation(&self) -> bool {
        let n = self.cols.len();
        let mut seen = vec![false; n];
        for &col in &self.cols {
            if col >= n || seen[col] {
                return false;
            }
            seen[col] = true;
        }
        true
    }
}

impl fmt::Display for Board {
    /// Renders the board as an `n × n` text grid, one rank per line: `Q`
    /// where a queen stands, `.` elsewhere.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.cols.len() {
            for col in 0..self.cols.len() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if self.cols[row] == col { "Q" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
