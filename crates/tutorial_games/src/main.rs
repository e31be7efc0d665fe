//! Tutorial Games - CLI
//!
//! Terminal host for the tutorial tic-tac-toe game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};
use tutorial_games::{
    HostConfig, Session, evaluation_report, render_board, render_state, replay_report,
};
use tutorial_tictactoe::{Board, GameStatus, MoveController, rules};

/// Handle for swapping the log filter once the config file is read.
type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let filter = init_tracing();

    match cli.command {
        Command::Play {
            config,
            show_history,
        } => run_play(&config, show_history, &filter),
        Command::Replay { moves, json } => run_replay(&moves, json),
        Command::Evaluate { board, json } => run_evaluate(&board, json),
    }
}

/// Logs go to stderr so they never interleave with the board.
///
/// RUST_LOG wins; otherwise the default `log_filter` applies until a
/// config file replaces it.
fn init_tracing() -> FilterHandle {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(HostConfig::default().log_filter()));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Switch to the config's `log_filter` unless RUST_LOG is set.
fn apply_log_filter(handle: &FilterHandle, config: &HostConfig) -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        handle
            .reload(EnvFilter::new(config.log_filter()))
            .context("Failed to apply log_filter")?;
    }
    Ok(())
}

/// Run an interactive session
fn run_play(config_path: &Path, show_history: bool, filter: &FilterHandle) -> Result<()> {
    let config = HostConfig::load_or_default(config_path)?;
    let config = if show_history {
        config.with_show_history(true)
    } else {
        config
    };
    apply_log_filter(filter, &config)?;

    info!(?config, "Starting interactive session");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(config)
        .run(stdin.lock(), stdout.lock())
        .context("Terminal I/O failed")
}

/// Replay moves and print the resulting state
#[instrument]
fn run_replay(moves: &[usize], json: bool) -> Result<()> {
    let state = MoveController::replay(moves).context("Replay failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&replay_report(&state))?);
    } else {
        print!("{}", render_state(&state, &HostConfig::default()));
    }
    Ok(())
}

/// Evaluate a single board
#[instrument]
fn run_evaluate(notation: &str, json: bool) -> Result<()> {
    let board: Board = notation
        .parse()
        .with_context(|| format!("Invalid board {:?}", notation))?;
    let winner = rules::evaluate(&board);
    let status = GameStatus::of(&board);

    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation_report(&board))?);
    } else {
        println!("{}\n", render_board(&board, false));
        match winner {
            Some(player) => println!("Winner: {}", player),
            None if status == GameStatus::Drawn => println!("Draw"),
            None => println!("No winner"),
        }
    }
    Ok(())
}
