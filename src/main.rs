//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life::{
    config::{CliOverrides, OutputFormat, SeedConfig, Settings},
    game_of_life::{create_example_patterns, load_grid_from_file, save_grid_to_file, Simulation},
    runner::Runner,
    utils::{ColorOutput, FrameFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation, printing every generation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Grid columns (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Number of generations (overrides config)
        #[arg(short, long, conflicts_with = "forever")]
        generations: Option<usize>,

        /// Run until interrupted
        #[arg(long)]
        forever: bool,

        /// Delay between generations in milliseconds (overrides config)
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// Seed this many random cells instead of the configured strategy
        #[arg(short, long, conflicts_with = "pattern")]
        random: Option<usize>,

        /// Seed for the random number generator
        #[arg(long)]
        rng_seed: Option<u64>,

        /// Seed from a pattern file instead of the configured strategy
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Stop once a generation changes nothing
        #[arg(long)]
        stop_when_stable: bool,

        /// Print one JSON document per generation
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Advance a pattern file a number of generations
    Step {
        /// Pattern file to evolve
        #[arg(short, long)]
        input: PathBuf,

        /// Number of generations
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Write the result to this file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            rows,
            cols,
            generations,
            forever,
            delay_ms,
            random,
            rng_seed,
            pattern,
            stop_when_stable,
            json,
            verbose,
        } => {
            let overrides = CliOverrides {
                rows,
                cols,
                generations,
                forever,
                delay_ms,
                stop_when_stable,
                random,
                rng_seed,
                pattern,
                json,
            };
            run_command(config, overrides, verbose)
        }
        Commands::Step {
            input,
            generations,
            output,
        } => step_command(input, generations, output),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Load the config file, falling back to defaults with a warning when it is missing
fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        return Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()));
    }

    let message = format!("Config file {} not found, using defaults", config_path.display());
    eprintln!("{}", ColorOutput::warning(&message));
    Ok(Settings::default())
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, verbose: bool) -> Result<()> {
    let mut settings = load_settings(&config_path)?;

    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;

    // JSON frames go to stdout untouched; status lines go to stderr
    if verbose {
        eprintln!("Configuration:");
        eprintln!("  Grid: {}x{}", settings.grid.rows, settings.grid.cols);
        eprintln!("  Seed: {}", describe_seed(&settings.seed));
        match settings.run.generations {
            Some(generations) => eprintln!("  Generations: {}", generations),
            None => eprintln!("  Generations: unbounded"),
        }
        eprintln!("  Delay: {}ms", settings.run.delay_ms);
        eprintln!("  Stop when stable: {}", settings.run.stop_when_stable);
        eprintln!(
            "  Format: {}",
            match settings.output.format {
                OutputFormat::Text => "text",
                OutputFormat::Json => "json",
            }
        );
        eprintln!();
    }

    let runner = Runner::new(settings);
    let summary = runner
        .run(&mut std::io::stdout().lock())
        .context("Simulation run failed")?;

    if verbose {
        eprintln!("\n{}", ColorOutput::success(&summary.to_string()));
    }

    Ok(())
}

fn describe_seed(seed: &SeedConfig) -> String {
    match seed {
        SeedConfig::Rectangle {
            row_start,
            row_end,
            col_start,
            col_end,
        } => format!(
            "rectangle rows {}..{}, cols {}..{}",
            row_start, row_end, col_start, col_end
        ),
        SeedConfig::Random {
            n_live,
            rng_seed: Some(seed),
        } => format!("{} random cells (seed {})", n_live, seed),
        SeedConfig::Random {
            n_live,
            rng_seed: None,
        } => format!("{} random cells", n_live),
        SeedConfig::Pattern {
            path,
            row_offset,
            col_offset,
        } => format!("pattern {} at ({}, {})", path.display(), row_offset, col_offset),
    }
}

fn step_command(input: PathBuf, generations: usize, output: Option<PathBuf>) -> Result<()> {
    let grid = load_grid_from_file(&input)
        .with_context(|| format!("Failed to load pattern from {}", input.display()))?;

    let mut simulation = Simulation::new(grid);
    simulation.advance(generations);

    match output {
        Some(path) => {
            let generation = simulation.generation();
            save_grid_to_file(&simulation.into_grid(), &path)?;
            let message = format!("Generation {} saved to {}", generation, path.display());
            println!("{}", ColorOutput::success(&message));
        }
        None => println!("{}", FrameFormatter::format_frame(&simulation, true)),
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("patterns");

    for dir in [&config_dir, &pattern_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&pattern_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut random_config = Settings::default();
    random_config.seed = SeedConfig::Random { n_live: 100, rng_seed: Some(42) };
    random_config.to_file(&examples_dir.join("random.yaml"))?;

    let mut glider_config = Settings::default();
    glider_config.seed = SeedConfig::Pattern {
        path: PathBuf::from("patterns/glider.txt"),
        row_offset: 0,
        col_offset: 0,
    };
    glider_config.run.generations = Some(80);
    glider_config.to_file(&examples_dir.join("glider.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
