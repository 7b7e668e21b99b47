//! Strictly Filler - command-line driver
//!
//! Generates grids and replays matches through the rules engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GridArgs};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_filler::{AnyGame, Color, GameSetup, Player, legal_colors};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so --json output stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate { grid, seed } => run_generate(&grid, seed),
        Command::Replay {
            grid,
            seed,
            json,
            moves,
        } => run_replay(&grid, seed, json, &moves),
    }
}

/// Generate a grid and print it with both players' legal colors
#[instrument(skip(args))]
fn run_generate(args: &GridArgs, seed: Option<u64>) -> Result<()> {
    let config = args.resolve()?;
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, "Generating grid");

    let setup = GameSetup::new(config, &mut StdRng::seed_from_u64(seed))
        .context("Failed to generate grid")?;
    let grid = setup.grid();
    let homes = setup.config().homes();

    println!("seed {}", seed);
    println!("{}", grid);
    for player in [Player::A, Player::B] {
        let legal = legal_colors(player, grid, homes);
        println!(
            "Player {} ({}): {}",
            player,
            homes.corner(player),
            format_colors(legal.iter().copied())
        );
    }
    Ok(())
}

/// Replay colors on a seeded grid and report the result
#[instrument(skip(args, moves), fields(moves = moves.len()))]
fn run_replay(args: &GridArgs, seed: u64, json: bool, moves: &[Color]) -> Result<()> {
    let config = args.resolve()?;
    let mut game = AnyGame::create(config, &mut StdRng::seed_from_u64(seed))
        .context("Failed to generate grid")?;

    for (index, color) in moves.iter().enumerate() {
        game = game
            .submit_move(*color)
            .with_context(|| format!("Move {} ({}) rejected", index + 1, color))?;
    }
    info!(turn = game.turn(), over = game.is_over(), "Replay complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
        return Ok(());
    }

    println!("{}", game.grid());
    println!("Score: {}", game.score());
    println!("{}", game.status_string());
    if !game.is_over() {
        println!("Legal colors: {}", format_colors(game.legal_colors().into_iter()));
    }
    Ok(())
}

fn format_colors(colors: impl Iterator<Item = Color>) -> String {
    let names: Vec<String> = colors.map(|c| c.to_string()).collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
