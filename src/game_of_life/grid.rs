//! Grid representation and neighbor queries for Game of Life

use anyhow::Result;
use itertools::iproduct;
use std::fmt;

/// Offsets of the Moore neighborhood, row delta outer, column delta inner.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A fixed-size rectangular grid of alive/dead cells.
///
/// Cells are stored row-major. Every accessor taking a `(row, col)` treats an
/// out-of-bounds position as a contract violation and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell dead
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` does not fit in a `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("grid dimensions {}x{} overflow usize", rows, cols));

        Self {
            rows,
            cols,
            cells: vec![false; len],
        }
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);

        for (i, row) in cells.iter().enumerate() {
            if row.len() != cols {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), cols);
            }
        }

        Ok(Self {
            rows,
            cols,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a degenerate grid with no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[track_caller]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Set the state of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[track_caller]
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[track_caller]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[track_caller]
    pub fn is_dead(&self, row: usize, col: usize) -> bool {
        !self.is_alive(row, col)
    }

    /// Iterate over every position, row-major
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        iproduct!(0..self.rows, 0..self.cols)
    }

    /// Positions of living cells in row-major order
    pub fn living_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.positions().filter(move |&(row, col)| self.is_alive(row, col))
    }

    /// Positions of dead cells in row-major order
    pub fn dead_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.positions().filter(move |&(row, col)| self.is_dead(row, col))
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub fn dead_count(&self) -> usize {
        self.len() - self.living_count()
    }

    /// True when no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// In-bounds neighbor positions of `(row, col)`. Edges do not wrap.
    pub fn neighbors(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.rows && c < self.cols).then_some((r, c))
        })
    }

    /// Count living neighbors of the cell at `(row, col)`.
    ///
    /// Edge and corner cells have fewer than eight candidate neighbors.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[track_caller]
    pub fn count_alive_neighbors(&self, row: usize, col: usize) -> u8 {
        self.index(row, col);
        self.neighbors(row, col)
            .filter(|&(r, c)| self.cells[r * self.cols + c])
            .count() as u8
    }

    /// Copy the living cells of `pattern` onto this grid, offset by
    /// `(row_offset, col_offset)`. Dead pattern cells leave the grid untouched.
    ///
    /// # Panics
    ///
    /// Panics if a living pattern cell lands outside the grid.
    #[track_caller]
    pub fn stamp(&mut self, pattern: &Grid, row_offset: usize, col_offset: usize) {
        for (row, col) in pattern.living_cells() {
            match (row.checked_add(row_offset), col.checked_add(col_offset)) {
                (Some(r), Some(c)) => self.set_alive(r, c, true),
                _ => panic!(
                    "pattern cell ({}, {}) at offset ({}, {}) out of bounds for {}x{} grid",
                    row,
                    col,
                    row_offset,
                    col_offset,
                    self.rows,
                    self.cols
                ),
            }
        }
    }

    /// Whether every living cell, shifted by `(row_offset, col_offset)`, lands
    /// inside a `rows x cols` grid
    pub fn fits_within(
        &self,
        rows: usize,
        cols: usize,
        row_offset: usize,
        col_offset: usize,
    ) -> bool {
        self.living_cells().all(|(row, col)| {
            row.checked_add(row_offset).is_some_and(|r| r < rows)
                && col.checked_add(col_offset).is_some_and(|c| c < cols)
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                let symbol = if self.is_alive(row, col) { 'O' } else { '.' };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.len(), 12);
        assert!(grid.is_extinct());
        assert_eq!(grid.dead_count(), 12);
    }

    #[test]
    fn test_zero_sized_grid() {
        let grid = Grid::new(0, 5);
        assert!(grid.is_empty());
        assert_eq!(grid.living_cells().count(), 0);
        assert_eq!(grid.dead_cells().count(), 0);
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.living_count(), 5);
    }

    #[test]
    fn test_from_cells_rejects_ragged_rows() {
        let cells = vec![vec![true, false], vec![true]];
        assert!(Grid::from_cells(cells).is_err());
    }

    #[test]
    fn test_set_and_query() {
        let mut grid = Grid::new(2, 2);
        grid.set_alive(1, 0, true);
        assert!(grid.is_alive(1, 0));
        assert!(!grid.is_dead(1, 0));
        grid.set_alive(1, 0, false);
        assert!(grid.is_dead(1, 0));
    }

    #[test]
    fn test_living_and_dead_cells_are_row_major() {
        let mut grid = Grid::new(3, 3);
        grid.set_alive(2, 0, true);
        grid.set_alive(0, 2, true);
        grid.set_alive(1, 1, true);

        let living: Vec<_> = grid.living_cells().collect();
        assert_eq!(living, vec![(0, 2), (1, 1), (2, 0)]);

        let dead: Vec<_> = grid.dead_cells().collect();
        assert_eq!(dead, vec![(0, 0), (0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        assert_eq!(grid.count_alive_neighbors(1, 1), 8);
        // Only (0,1) and (1,0) are alive among the corner's neighbors
        assert_eq!(grid.count_alive_neighbors(0, 0), 2);
        assert_eq!(grid.count_alive_neighbors(0, 1), 4);
    }

    #[test]
    fn test_corner_does_not_wrap() {
        let mut grid = Grid::new(4, 4);
        for (row, col) in [(3, 3), (0, 3), (3, 0)] {
            grid.set_alive(row, col, true);
        }
        assert_eq!(grid.count_alive_neighbors(0, 0), 0);

        let neighbors: Vec<_> = grid.neighbors(0, 0).collect();
        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_neighbor_enumeration_order() {
        let grid = Grid::new(3, 3);
        let neighbors: Vec<_> = grid.neighbors(1, 1).collect();
        assert_eq!(
            neighbors,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_stamp() {
        let pattern = Grid::from_cells(vec![vec![true, false], vec![false, true]]).unwrap();
        let mut grid = Grid::new(4, 4);
        grid.set_alive(3, 3, true);
        grid.stamp(&pattern, 1, 2);

        let living: Vec<_> = grid.living_cells().collect();
        assert_eq!(living, vec![(1, 2), (2, 3), (3, 3)]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_stamp_offset_overflow() {
        let pattern = Grid::from_cells(vec![vec![false], vec![true]]).unwrap();
        let mut grid = Grid::new(3, 3);
        grid.stamp(&pattern, usize::MAX, 0);
    }

    #[test]
    fn test_fits_within() {
        let pattern = Grid::from_cells(vec![vec![false, false], vec![true, false]]).unwrap();
        assert!(pattern.fits_within(3, 3, 1, 2));
        assert!(!pattern.fits_within(3, 3, 2, 0));
        assert!(!pattern.fits_within(3, 3, usize::MAX, 0));
        assert!(!pattern.fits_within(3, 3, 0, usize::MAX));

        // Dead cells never need room
        assert!(Grid::new(4, 4).fits_within(1, 1, usize::MAX, usize::MAX));
    }

    #[test]
    #[should_panic(expected = "overflow usize")]
    fn test_new_dimensions_overflow() {
        Grid::new(1 << (usize::BITS - 1), 2);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2, 3);
        grid.set_alive(0, 1, true);
        grid.set_alive(1, 2, true);
        assert_eq!(grid.to_string(), ". O .\n. . O");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_alive_out_of_bounds() {
        let mut grid = Grid::new(3, 3);
        grid.set_alive(3, 0, true);
    }

    #[test]
    fn test_every_accessor_panics_out_of_bounds() {
        let grid = Grid::new(3, 4);
        let positions = [(3, 0), (0, 4), (3, 4), (usize::MAX, 0), (0, usize::MAX)];

        for (row, col) in positions {
            let mut copy = grid.clone();
            assert!(std::panic::catch_unwind(move || copy.set_alive(row, col, true)).is_err());
            assert!(std::panic::catch_unwind(|| grid.is_alive(row, col)).is_err());
            assert!(std::panic::catch_unwind(|| grid.is_dead(row, col)).is_err());
            assert!(std::panic::catch_unwind(|| grid.count_alive_neighbors(row, col)).is_err());
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_stamp_out_of_bounds() {
        let pattern = Grid::from_cells(vec![vec![true, true]]).unwrap();
        let mut grid = Grid::new(2, 2);
        grid.stamp(&pattern, 0, 1);
    }
}
