//! Configuration management for the Game of Life runner

pub mod settings;

pub use settings::{
    CliOverrides, GridConfig, OutputConfig, OutputFormat, RunConfig, SeedConfig, Settings,
};
