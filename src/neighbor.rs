//! Neighbor generation for the annealing search.

use crate::board::Board;
use rand::Rng;

/// Produces a candidate board by swapping the queens of two distinct,
/// uniformly drawn rows.
///
/// Both indices are redrawn until they differ; the swap is then applied to
/// a copy, never to the input. Swapping rows keeps the column values a
/// permutation, so candidates stay free of row and column conflicts and
/// the whole permutation space stays reachable through repeated swaps.
///
/// # Panics
///
/// Panics if the board has fewer than two rows: no distinct pair of
/// indices exists, and the rejection loop could not terminate. The
/// annealing loop never reaches this case: boards that small are already
/// solved at initialization.
pub fn swap_neighbor<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let n = board.len();
    assert!(n >= 2, "swap_neighbor requires a board with at least 2 rows");

    let (i, j) = loop {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        if i != j {
            break (i, j);
        }
    };

    let mut cols = board.as_slice().to_vec();
    cols.swap(i, j);
    Board::new(cols)
}
