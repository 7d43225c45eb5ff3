//! negamax-tictactoe - play or analyze tic-tac-toe from the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use negamax_tictactoe_cli::{Cli, Command, GameLoop, PlayConfig, PlayerKind, build_report, write_report};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => run_play(None, None, None, false),
        Some(Command::Play {
            cross,
            circle,
            config,
            show_free_cells,
        }) => run_play(cross, circle, config, show_free_cells),
        Some(Command::Analyze { cells, json }) => run_analyze(&cells, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    cross: Option<PlayerKind>,
    circle: Option<PlayerKind>,
    config: Option<PathBuf>,
    show_free_cells: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => PlayConfig::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => PlayConfig::default(),
    }
    .with_overrides(cross, circle, show_free_cells);
    info!(?config, "Starting game");

    let mut game = GameLoop::from_config(&config, io::stdin().lock());
    let mut stdout = io::stdout().lock();
    game.run(&mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Print the analysis of a replayed position
#[instrument]
fn run_analyze(cells: &[usize], json: bool) -> Result<()> {
    let report = build_report(cells)?;
    let mut stdout = io::stdout().lock();
    write_report(&report, json, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
