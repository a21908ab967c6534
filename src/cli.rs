//! Command-line interface for persisted_tictactoe.

use persisted_tictactoe::HistoryMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Persisted Tic-Tac-Toe - one move per invocation, state kept on disk
#[derive(Parser, Debug)]
#[command(name = "persisted_tictactoe")]
#[command(about = "Tic-tac-toe whose board and history survive between runs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (optional)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Directory where game state is stored (overrides config)
    #[arg(long)]
    pub store_dir: Option<PathBuf>,

    /// History mode: marks or snapshots (overrides config)
    #[arg(long)]
    pub history: Option<HistoryMode>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the board, status and history
    Show,

    /// Place the next mark on a square
    Select {
        /// Square index 0-8, or a label such as "center" or "top-left"
        square: String,
    },

    /// Clear the board and history
    Restart,

    /// Rewind to a history entry (snapshot history only)
    Jump {
        /// History entry index, as listed by `show`
        index: usize,
    },

    /// Show the persisted greeting, optionally changing the name first
    Greet {
        /// New name to store
        name: Option<String>,
    },
}
