//! Command-line interface for strictly_hanoi.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Hanoi - drag discs between pegs, illegal moves snap back
#[derive(Parser, Debug)]
#[command(name = "strictly_hanoi")]
#[command(about = "Tower of Hanoi with enforced move legality", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal with the mouse
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Replay the classic solution as drag gestures
    Demo {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print each move outcome as a JSON line
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_demo() {
        let cli = Cli::parse_from(["strictly_hanoi", "demo", "--json", "-c", "tower.toml"]);
        match cli.command {
            Command::Demo { config, json } => {
                assert!(json);
                assert_eq!(config, Some(PathBuf::from("tower.toml")));
            }
            other => panic!("Expected demo, got {:?}", other),
        }
    }
}
