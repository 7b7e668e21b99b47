//! Command-line interface for strictly_filler.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_filler::{Color, MatchConfig};

/// Strictly Filler - territory-capture rules engine
#[derive(Parser, Debug)]
#[command(name = "strictly_filler")]
#[command(about = "Generate Filler grids and replay matches", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a grid and show each player's legal colors
    Generate {
        #[command(flatten)]
        grid: GridArgs,

        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a seeded grid and play colors in order
    Replay {
        #[command(flatten)]
        grid: GridArgs,

        /// RNG seed for the initial grid
        #[arg(long)]
        seed: u64,

        /// Print the final match as a JSON snapshot
        #[arg(long)]
        json: bool,

        /// Colors to play, starting with the first player
        #[arg(required = true, value_name = "COLOR")]
        moves: Vec<Color>,
    },
}

/// Match configuration options shared by all commands
#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Path to a TOML match configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override grid rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Override grid columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Override palette size (3-6)
    #[arg(long)]
    pub colors: Option<usize>,
}

impl GridArgs {
    /// Loads the configuration file, if any, and applies overrides.
    pub fn resolve(&self) -> Result<MatchConfig, strictly_filler::ConfigError> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::from_file(path)?,
            None => MatchConfig::default(),
        };
        if let Some(rows) = self.rows {
            config = config.with_rows(rows);
        }
        if let Some(cols) = self.cols {
            config = config.with_cols(cols);
        }
        if let Some(colors) = self.colors {
            config = config.with_num_colors(colors);
        }
        Ok(config)
    }
}
