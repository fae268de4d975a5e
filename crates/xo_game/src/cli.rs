//! Command-line interface for xo_game.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// XO Game - tic-tac-toe against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "xo_game")]
#[command(about = "Play tic-tac-toe against the computer in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./xo_game.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The requested subcommand, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play { seed: None })
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Seed for the computer opponent (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play rounds headlessly with a random stand-in for the human and print the tally as JSON
    Autoplay {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        rounds: u32,

        /// Seed for both random players (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["xo_game"]);
        assert_eq!(cli.command(), Command::Play { seed: None });
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_autoplay_args() {
        let cli = Cli::parse_from(["xo_game", "autoplay", "-r", "12", "--seed", "3", "-c", "x.toml"]);
        assert_eq!(
            cli.command(),
            Command::Autoplay {
                rounds: 12,
                seed: Some(3)
            }
        );
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
