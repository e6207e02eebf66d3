//! File I/O operations for Game of Life patterns
//!
//! Patterns use the same text as the console frames: `O` for alive and `.`
//! for dead, optionally separated by spaces. `1`/`0` are accepted too. Blank
//! lines and lines starting with `#` or `!` are ignored.

use super::Grid;
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

/// Errors from parsing a pattern
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern contains no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected} (rows must have equal length)")]
    RaggedRow { row: usize, found: usize, expected: usize },

    #[error("invalid character '{ch}' at ({row}, {col}); expected 'O', '.', '1' or '0'")]
    InvalidCell { ch: char, row: usize, col: usize },
}

/// Load a grid from a pattern file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_grid(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))
}

/// Parse a grid from its text representation
pub fn parse_grid(content: &str) -> Result<Grid, PatternError> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .collect();

    if lines.is_empty() {
        return Err(PatternError::Empty);
    }

    let mut cells: Vec<Vec<bool>> = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        let row = line
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .enumerate()
            .map(|(col_idx, ch)| match ch {
                'O' | '1' => Ok(true),
                '.' | '0' => Ok(false),
                _ => Err(PatternError::InvalidCell { ch, row: row_idx, col: col_idx }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(first) = cells.first() {
            if row.len() != first.len() {
                return Err(PatternError::RaggedRow {
                    row: row_idx,
                    found: row.len(),
                    expected: first.len(),
                });
            }
        }
        cells.push(row);
    }

    let rows = cells.len();
    let cols = cells[0].len();
    let mut grid = Grid::new(rows, cols);
    for (row, line) in cells.iter().enumerate() {
        for (col, &alive) in line.iter().enumerate() {
            grid.set_alive(row, col, alive);
        }
    }
    Ok(grid)
}

/// Save a grid to a pattern file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, grid_to_string(grid))
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Text representation of a grid, newline terminated
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = grid.to_string();
    result.push('\n');
    result
}

/// Write the stock example patterns into `output_dir`
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns = [
        (
            "blinker.txt",
            "# Period 2 oscillator\n. . . . .\n. . . . .\n. O O O .\n. . . . .\n. . . . .\n",
        ),
        ("block.txt", "# Still life\n. . . .\n. O O .\n. O O .\n. . . .\n"),
        (
            "glider.txt",
            "# Moves diagonally every 4 generations\n\
             . O . . .\n. . O . .\nO O O . .\n. . . . .\n. . . . .\n",
        ),
        ("beacon.txt", "# Period 2 oscillator\nO O . .\nO O . .\n. . O O\n. . O O\n"),
        ("toad.txt", "# Period 2 oscillator\n. . . .\n. O O O\nO O O .\n. . . .\n"),
    ];

    for (name, content) in patterns {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid() {
        let grid = parse_grid(". O .\nO . O\n. O .\n").unwrap();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.living_count(), 4);
        assert!(grid.is_alive(0, 1));
        assert!(grid.is_alive(1, 0));
        assert!(grid.is_alive(1, 2));
        assert!(grid.is_alive(2, 1));
    }

    #[test]
    fn test_parse_compact_and_binary_forms() {
        let compact = parse_grid(".O.\nO.O\n").unwrap();
        let binary = parse_grid("010\n101\n").unwrap();
        assert_eq!(compact, binary);
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let grid = parse_grid("# block\n!note\n\nO O\n\nO O\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.living_count(), 4);
    }

    #[test]
    fn test_grid_to_string() {
        let grid = parse_grid("010\n101\n").unwrap();
        assert_eq!(grid_to_string(&grid), ". O .\nO . O\n");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            parse_grid("O.O\nOXO\n"),
            Err(PatternError::InvalidCell { ch: 'X', row: 1, col: 1 })
        );
        assert_eq!(
            parse_grid("O.O\nOO\n"),
            Err(PatternError::RaggedRow { row: 1, found: 2, expected: 3 })
        );
        assert_eq!(parse_grid("# only a comment\n"), Err(PatternError::Empty));
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/test_grid.txt");

        let original = parse_grid("O . O\n. O .\n").unwrap();
        save_grid_to_file(&original, &file_path).unwrap();
        let loaded = load_grid_from_file(&file_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempdir().unwrap();
        let err = load_grid_from_file(temp_dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read pattern file"));
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for name in ["blinker", "block", "glider", "beacon", "toad"] {
            assert!(temp_dir.path().join(format!("{}.txt", name)).exists());
        }

        let glider = load_grid_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.rows(), 5);
        assert_eq!(glider.cols(), 5);
        assert_eq!(glider.living_count(), 5);

        let toad = load_grid_from_file(temp_dir.path().join("toad.txt")).unwrap();
        assert_eq!(toad.living_count(), 6);
    }
}
