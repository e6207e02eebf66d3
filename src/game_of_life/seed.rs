//! Initial population helpers

use super::Grid;
use rand::Rng;

/// Set every cell in the half-open rectangle `[row_start, row_end) x
/// [col_start, col_end)` alive. An empty range seeds nothing.
///
/// # Panics
///
/// Panics if the rectangle reaches outside the grid.
#[track_caller]
pub fn rectangle_seed(
    grid: &mut Grid,
    row_start: usize,
    row_end: usize,
    col_start: usize,
    col_end: usize,
) {
    for row in row_start..row_end {
        for col in col_start..col_end {
            grid.set_alive(row, col, true);
        }
    }
}

/// Draw `n_live` positions uniformly with replacement and set them alive.
///
/// Repeated draws may land on the same cell, so at most `n_live` cells end up
/// newly alive. A grid without cells is left untouched.
pub fn random_seed<R: Rng + ?Sized>(grid: &mut Grid, n_live: usize, rng: &mut R) {
    if grid.is_empty() {
        return;
    }

    for _ in 0..n_live {
        let idx = rng.random_range(0..grid.len());
        grid.set_alive(idx / grid.cols(), idx % grid.cols(), true);
    }
}
