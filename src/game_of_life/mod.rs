//! Game of Life core functionality

pub mod grid;
pub mod io;
pub mod rules;
pub mod seed;
pub mod simulation;

pub use grid::Grid;
pub use io::{
    create_example_patterns, load_grid_from_file, parse_grid, save_grid_to_file, PatternError,
};
pub use rules::LifeRules;
pub use seed::{random_seed, rectangle_seed};
pub use simulation::{Simulation, Snapshot, Transition};
