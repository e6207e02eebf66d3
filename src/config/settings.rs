//! Configuration settings for the Game of Life runner

use crate::game_of_life::load_grid_from_file;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub seed: SeedConfig,
    pub run: RunConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

/// How the initial population is chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SeedConfig {
    Rectangle {
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    },
    Random {
        n_live: usize,
        #[serde(default)]
        rng_seed: Option<u64>,
    },
    Pattern {
        path: PathBuf,
        #[serde(default)]
        row_offset: usize,
        #[serde(default)]
        col_offset: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// `None` runs until interrupted
    pub generations: Option<usize>,
    pub delay_ms: u64,
    #[serde(default)]
    pub stop_when_stable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub show_generation: bool,
    #[serde(default)]
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig { rows: 20, cols: 20 },
            seed: SeedConfig::Rectangle {
                row_start: 0,
                row_end: 15,
                col_start: 7,
                col_end: 8,
            },
            run: RunConfig {
                generations: Some(500),
                delay_ms: 100,
                stop_when_stable: false,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_generation: true,
                clear_screen: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let GridConfig { rows, cols } = self.grid;
        if rows == 0 || cols == 0 {
            anyhow::bail!("Grid dimensions must be positive, got {}x{}", rows, cols);
        }

        match &self.seed {
            SeedConfig::Rectangle {
                row_start,
                row_end,
                col_start,
                col_end,
            } => {
                if row_start > row_end || col_start > col_end {
                    anyhow::bail!(
                        "Seed rectangle is inverted: rows {}..{}, cols {}..{}",
                        row_start,
                        row_end,
                        col_start,
                        col_end
                    );
                }
                if *row_end > rows || *col_end > cols {
                    anyhow::bail!(
                        "Seed rectangle rows {}..{}, cols {}..{} does not fit a {}x{} grid",
                        row_start,
                        row_end,
                        col_start,
                        col_end,
                        rows,
                        cols
                    );
                }
            }
            SeedConfig::Random { .. } => {}
            SeedConfig::Pattern {
                path,
                row_offset,
                col_offset,
            } => {
                if !path.exists() {
                    anyhow::bail!("Pattern file does not exist: {}", path.display());
                }
                let pattern = load_grid_from_file(path)?;
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
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.grid.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.grid.cols = cols;
        }
        if let Some(generations) = cli_overrides.generations {
            self.run.generations = Some(generations);
        }
        if cli_overrides.forever {
            self.run.generations = None;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.run.delay_ms = delay_ms;
        }
        if cli_overrides.stop_when_stable {
            self.run.stop_when_stable = true;
        }
        if let Some(n_live) = cli_overrides.random {
            self.seed = SeedConfig::Random {
                n_live,
                rng_seed: cli_overrides.rng_seed,
            };
        } else if let Some(ref path) = cli_overrides.pattern {
            self.seed = SeedConfig::Pattern {
                path: path.clone(),
                row_offset: 0,
                col_offset: 0,
            };
        } else if let (Some(seed), SeedConfig::Random { rng_seed, .. }) =
            (cli_overrides.rng_seed, &mut self.seed)
        {
            *rng_seed = Some(seed);
        }
        if cli_overrides.json {
            self.output.format = OutputFormat::Json;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub generations: Option<usize>,
    pub forever: bool,
    pub delay_ms: Option<u64>,
    pub stop_when_stable: bool,
    pub random: Option<usize>,
    pub rng_seed: Option<u64>,
    pub pattern: Option<PathBuf>,
    pub json: bool,
}
