//! Generation-by-generation evolution of a grid

use super::{random_seed, rectangle_seed, Grid, LifeRules};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Cells that change state in one generation, each list in row-major order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub to_die: Vec<(usize, usize)>,
    pub to_birth: Vec<(usize, usize)>,
}

impl Transition {
    /// True when the generation changes nothing (still life or extinction)
    pub fn is_empty(&self) -> bool {
        self.to_die.is_empty() && self.to_birth.is_empty()
    }

    pub fn len(&self) -> usize {
        self.to_die.len() + self.to_birth.len()
    }
}

/// Serializable view of a simulation at one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: u64,
    pub rows: usize,
    pub cols: usize,
    pub living: Vec<(usize, usize)>,
}

/// A grid plus a generation counter
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Classify every cell against the current grid without mutating it.
    ///
    /// Living cells with fewer than two or more than three living neighbors
    /// die; dead cells with exactly three are born.
    pub fn pending_transition(&self) -> Transition {
        let to_die = self
            .grid
            .living_cells()
            .filter(|&(row, col)| !LifeRules::survives(self.grid.count_alive_neighbors(row, col)))
            .collect();

        let to_birth = self
            .grid
            .dead_cells()
            .filter(|&(row, col)| LifeRules::is_born(self.grid.count_alive_neighbors(row, col)))
            .collect();

        Transition { to_die, to_birth }
    }

    /// Advance one generation and return the cells that changed.
    ///
    /// The whole grid is scanned before any cell is written, so every cell is
    /// judged against the same pre-tick state.
    pub fn tick(&mut self) -> Transition {
        let transition = self.pending_transition();

        for &(row, col) in &transition.to_die {
            self.grid.set_alive(row, col, false);
        }
        for &(row, col) in &transition.to_birth {
            self.grid.set_alive(row, col, true);
        }

        self.generation += 1;
        transition
    }

    /// Tick `generations` times
    pub fn advance(&mut self, generations: usize) {
        for _ in 0..generations {
            self.tick();
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            living: self.grid.living_cells().collect(),
        }
    }

    /// See [`rectangle_seed`]
    #[track_caller]
    pub fn rectangle_seed(
        &mut self,
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    ) {
        rectangle_seed(&mut self.grid, row_start, row_end, col_start, col_end);
    }

    /// See [`random_seed`]
    pub fn random_seed<R: Rng + ?Sized>(&mut self, n_live: usize, rng: &mut R) {
        random_seed(&mut self.grid, n_live, rng);
    }
}
