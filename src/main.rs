//! Persisted Tic-Tac-Toe - terminal front end
//!
//! Each invocation opens the on-disk store, performs one operation and
//! prints the resulting game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use persisted_tictactoe::{FileStore, GameConfig, GameController, Greeting, Position};
use std::rc::Rc;
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
    let config = GameConfig::from_file_or_default(&cli.config)?
        .with_overrides(cli.store_dir, cli.history);
    info!(
        store_dir = %config.store_dir().display(),
        history_mode = %config.history_mode(),
        "Configuration resolved"
    );

    let store = Rc::new(FileStore::new(config.store_dir()));

    match cli.command {
        Command::Greet { name } => run_greet(store, name),
        Command::Show => run_game(store, &config, |_| Ok(())),
        Command::Select { square } => run_game(store, &config, |game| {
            let Some(position) = Position::parse(&square) else {
                bail!("Unknown square '{}': use 0-8 or a label like 'center'", square);
            };
            game.select_square(position.to_index())?;
            Ok(())
        }),
        Command::Restart => run_game(store, &config, |game| Ok(game.restart()?)),
        Command::Jump { index } => run_game(store, &config, |game| Ok(game.jump_to(index)?)),
    }
}

/// Open the stored game, apply one operation and print the result
#[instrument(skip(store, config, operation))]
fn run_game<F>(store: Rc<FileStore>, config: &GameConfig, operation: F) -> Result<()>
where
    F: FnOnce(&mut GameController<Rc<FileStore>>) -> Result<()>,
{
    let mut game = GameController::open(store, *config.history_mode())
        .context("Failed to load stored game")?;

    operation(&mut game)?;

    println!("{}", game.board().display());
    println!();
    println!("{}", game.status());
    if !game.history().is_empty() {
        println!();
        for (i, entry) in game.history().iter().enumerate() {
            println!("{:>2}. {}", i, entry);
        }
    }
    Ok(())
}

/// Show the stored greeting, updating the name first if given
#[instrument(skip(store))]
fn run_greet(store: Rc<FileStore>, name: Option<String>) -> Result<()> {
    let mut greeting = Greeting::open(store, "").context("Failed to load stored name")?;
    if let Some(name) = name {
        greeting.set_name(&name)?;
    }
    println!("{}", greeting.message());
    Ok(())
}
