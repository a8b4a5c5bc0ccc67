//! Strictly Hanoi - unified CLI
//!
//! Plays the puzzle in the terminal or replays its solution.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use strictly_hanoi_tui::{AppConfig, Cli, Command, logging, run_demo, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Demo { config, json } => run_demo_command(config, json),
        Command::Config => print_config(),
    }
}

/// Run the interactive terminal puzzle
fn run_play(config: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config.as_deref())?;
    tui::run(&config)
}

/// Replay the solution on stdout
fn run_demo_command(config: Option<PathBuf>, json: bool) -> Result<()> {
    let config = AppConfig::load(config.as_deref())?;
    logging::init_stderr(config.log());

    info!("Starting Strictly Hanoi demo");
    let mut stdout = std::io::stdout().lock();
    run_demo(config.tower(), json, &mut stdout)?;
    Ok(())
}

/// Print the default configuration
fn print_config() -> Result<()> {
    print!("{}", AppConfig::default().to_toml()?);
    Ok(())
}
