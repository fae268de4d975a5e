//! XO Game - tic-tac-toe against a random computer opponent.
//!
//! The game rules live in [`xo_tictactoe`]; this crate adds the command line,
//! configuration, logging, the terminal UI and a headless autoplay mode.
//!
//! # Architecture
//!
//! - **Config**: TOML settings, overridable from the CLI
//! - **TUI**: ratatui front end that renders [`xo_tictactoe::Snapshot`]s
//! - **Autoplay**: headless rounds for smoke-testing the engine

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod autoplay;
mod cli;
mod config;
mod telemetry;
pub mod tui;

pub use autoplay::{AutoplayReport, run as autoplay};
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use telemetry::{init_file_logging, init_stderr_logging};
