//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{Grid, Simulation};
use anyhow::Result;

/// ANSI sequence that clears the terminal and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Render simulation frames
pub struct FrameFormatter;

impl FrameFormatter {
    /// `O` for alive, `.` for dead, space-separated columns, one line per row
    pub fn format_grid(grid: &Grid) -> String {
        grid.to_string()
    }

    /// A grid prefixed with its `tick=N` header line
    pub fn format_frame(simulation: &Simulation, show_generation: bool) -> String {
        let grid = Self::format_grid(simulation.grid());
        if show_generation {
            format!("tick={}\n{}", simulation.generation(), grid)
        } else {
            grid
        }
    }

    /// One compact JSON document describing the current generation
    pub fn format_json(simulation: &Simulation) -> Result<String> {
        Ok(serde_json::to_string(&simulation.snapshot())?)
    }

    /// Render a frame in the requested output format
    pub fn render(
        simulation: &Simulation,
        format: OutputFormat,
        show_generation: bool,
    ) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_frame(simulation, show_generation)),
            OutputFormat::Json => Self::format_json(simulation),
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
