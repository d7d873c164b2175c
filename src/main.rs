//! Anne Hoy - Unified CLI
//!
//! Play the Tour of Anne Hoy by hand, watch the optimal four-stool tour,
//! or list its move counts.

#![warn(missing_docs)]

mod cli;

use anne_hoy::{ConsoleController, TourConfig, animate};
use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::Write;
use std::path::PathBuf;
use toah_core::{PuzzleState, SplitTable, cost3, solve_four_peg_tour};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            cheeses,
            stools,
            config,
        } => run_play(cheeses, stools, config),
        Command::Tour {
            cheeses,
            config,
            animate,
            delay_ms,
            json,
        } => run_tour(cheeses, config, animate, delay_ms, json),
        Command::Cost { up_to } => run_cost(up_to),
    }
}

/// Play on stdin/stdout
#[instrument]
fn run_play(cheeses: Option<u32>, stools: Option<usize>, config: Option<PathBuf>) -> Result<()> {
    let config = TourConfig::load(config.as_deref())?
        .with_cheeses(cheeses)
        .with_stools(stools);
    info!(?config, "Starting console game");

    let stdin = std::io::stdin();
    let controller = ConsoleController::new(
        *config.cheeses(),
        *config.stools(),
        stdin.lock(),
        std::io::stdout(),
    )?;
    controller.play_loop()?;
    Ok(())
}

/// Solve with four stools and report the result
#[instrument]
fn run_tour(
    cheeses: Option<u32>,
    config: Option<PathBuf>,
    animate_flag: bool,
    delay_ms: Option<u64>,
    json: bool,
) -> Result<()> {
    let config = TourConfig::load(config.as_deref())?
        .with_cheeses(cheeses)
        .with_delay_ms(delay_ms)
        .with_animate(animate_flag);
    info!(?config, "Starting four-stool tour");

    let mut model = PuzzleState::new(*config.stools())?;
    model.fill_first_peg(*config.cheeses())?;
    solve_four_peg_tour(&mut model).context("Four-stool tour failed")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if *config.animate() {
        animate(
            model.move_sequence(),
            *config.stools(),
            *config.cheeses(),
            config.delay(),
            &mut out,
        )?;
    } else {
        writeln!(out, "{}", model)?;
    }
    writeln!(out, "{}", model.move_count())?;

    if json {
        let trace = serde_json::to_string_pretty(model.move_sequence())?;
        writeln!(out, "{}", trace)?;
    }
    Ok(())
}

/// Print the cost table
#[instrument]
fn run_cost(up_to: usize) -> Result<()> {
    let mut table = SplitTable::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{:>4}  {:>12}  {:>5}  {:>20}", "n", "four stools", "split", "three stools")?;
    for n in 1..=up_to {
        let Some(split) = table.get(n) else {
            writeln!(out, "{:>4}  move count overflows u64", n)?;
            break;
        };
        let three = cost3(n).map_or_else(|| "overflow".to_string(), |c| c.to_string());
        writeln!(out, "{:>4}  {:>12}  {:>5}  {:>20}", n, split.moves, split.index, three)?;
    }
    Ok(())
}
