//! XO Game - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use xo_game::{AppConfig, Cli, Command};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command() {
        Command::Play { seed } => {
            let config = config.with_seed(seed);
            xo_game::init_file_logging(&config)?;
            info!("Starting xo_game");
            xo_game::tui::run(&config)
        }
        Command::Autoplay { rounds, seed } => {
            let config = config.with_seed(seed);
            xo_game::init_stderr_logging(&config);
            let report = xo_game::autoplay(&config, rounds).context("Autoplay failed")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
