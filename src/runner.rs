//! Timed print loop driving a simulation from settings

use crate::config::{OutputFormat, SeedConfig, Settings};
use crate::game_of_life::{load_grid_from_file, Grid, Simulation};
use crate::utils::{FrameFormatter, CLEAR_SCREEN};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::io::Write;
use std::time::Duration;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    StillLife,
    Extinct,
}

/// Outcome of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub final_living: usize,
    pub stop_reason: StopReason,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.stop_reason {
            StopReason::GenerationLimit => "generation limit reached",
            StopReason::StillLife => "population stopped changing",
            StopReason::Extinct => "population died out",
        };
        writeln!(f, "Run Summary:")?;
        writeln!(f, "  Generations: {}", self.generations)?;
        writeln!(f, "  Living cells: {}", self.final_living)?;
        write!(f, "  Stopped: {}", reason)
    }
}

/// Builds a seeded simulation and prints it generation by generation
pub struct Runner {
    settings: Settings,
}

impl Runner {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Create the grid and apply the configured seed strategy
    pub fn build_simulation(&self) -> Result<Simulation> {
        let (rows, cols) = (self.settings.grid.rows, self.settings.grid.cols);
        let mut simulation = Simulation::new(Grid::new(rows, cols));

        match &self.settings.seed {
            SeedConfig::Rectangle {
                row_start,
                row_end,
                col_start,
                col_end,
            } => {
                if *row_end > rows || *col_end > cols {
                    anyhow::bail!("Seed rectangle does not fit a {}x{} grid", rows, cols);
                }
                simulation.rectangle_seed(*row_start, *row_end, *col_start, *col_end);
            }
            SeedConfig::Random { n_live, rng_seed } => match rng_seed {
                Some(seed) => simulation.random_seed(*n_live, &mut StdRng::seed_from_u64(*seed)),
                None => simulation.random_seed(*n_live, &mut rand::rng()),
            },
            SeedConfig::Pattern {
                path,
                row_offset,
                col_offset,
            } => {
                let pattern = load_grid_from_file(path)
                    .with_context(|| format!("Failed to load seed pattern {}", path.display()))?;
                if !pattern.fits_within(rows, cols, *row_offset, *col_offset) {
                    anyhow::bail!(
                        "Pattern {} at offset ({}, {}) does not fit a {}x{} grid",
                        path.display(),
                        row_offset,
                        col_offset,
                        rows,
                        cols
                    );
                }
                simulation.grid_mut().stamp(&pattern, *row_offset, *col_offset);
            }
        }

        Ok(simulation)
    }

    /// Print a frame, tick, then wait, until the generation limit is reached
    /// or, with `stop_when_stable`, until a tick changes nothing.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let mut simulation = self.build_simulation()?;
        let run = &self.settings.run;
        let output = &self.settings.output;
        let delay = Duration::from_millis(run.delay_ms);

        let stop_reason = loop {
            if run.generations.is_some_and(|limit| simulation.generation() >= limit as u64) {
                break StopReason::GenerationLimit;
            }

            // JSON frames stay free of terminal control sequences
            if output.clear_screen && output.format == OutputFormat::Text {
                write!(out, "{}", CLEAR_SCREEN)?;
            }
            let frame = FrameFormatter::render(&simulation, output.format, output.show_generation)?;
            writeln!(out, "{}", frame)?;
            out.flush().context("Failed to flush output")?;

            let transition = simulation.tick();

            if run.stop_when_stable && transition.is_empty() {
                break if simulation.grid().is_extinct() {
                    StopReason::Extinct
                } else {
                    StopReason::StillLife
                };
            }

            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        };

        Ok(RunSummary {
            generations: simulation.generation(),
            final_living: simulation.grid().living_count(),
            stop_reason,
        })
    }
}
