//! Command-line interface for tutorial_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tutorial_games::DEFAULT_CONFIG_FILE;

/// Tutorial Games - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tutorial_games")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Path to host config (defaults apply if the file is missing)
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Print the move list after every move
        #[arg(long)]
        show_history: bool,
    },

    /// Apply a comma-separated list of cell indices and print the result
    Replay {
        /// Cell indices (0-8) in play order, e.g. 0,3,1,4,2
        #[arg(value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print the game state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report the winner of a board, e.g. "XXX/.OO/..."
    Evaluate {
        /// Nine cells: X, O, or . for empty; '/' and spaces are ignored
        board: String,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },
}
