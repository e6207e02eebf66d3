//! Conway's Game of Life
//!
//! This library provides a bounded grid, the generation update rule, seeding
//! helpers and a configurable driver that prints a simulation frame by frame.

pub mod config;
pub mod game_of_life;
pub mod runner;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Grid, Simulation};
pub use runner::{RunSummary, Runner};

use anyhow::Result;

/// Main entry point: run a configured simulation, printing to stdout
pub fn run_simulation(settings: Settings) -> Result<RunSummary> {
    settings.validate()?;
    Runner::new(settings).run(&mut std::io::stdout().lock())
}
