//! Terminal UI for playing against the computer.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for};

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};
use xo_tictactoe::{GameState, Opponent, RandomOpponent};

/// Runs the terminal UI until the user quits.
#[instrument(skip_all, fields(seed = ?config.seed()))]
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting terminal UI");

    let game = GameState::with_policy(
        RandomOpponent::from_seed_or_entropy(*config.seed()),
        *config.score_on_undo(),
    );
    let mut app = App::new(game);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(score = %app.game().score(), "Terminal UI closed");
    res
}

fn run_loop<B, O>(terminal: &mut Terminal<B>, app: &mut App<O>) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
    O: Opponent,
{
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
