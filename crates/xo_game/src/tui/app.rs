//! Application state and key handling.

use super::input::{Action, action_for};
use crossterm::event::KeyCode;
use tracing::{debug, info, warn};
use xo_tictactoe::{GameState, Opponent, Player, Position, RandomOpponent, Snapshot};

/// Main application state.
pub struct App<O = RandomOpponent> {
    game: GameState<O>,
    cursor: Position,
    message: Option<String>,
    should_quit: bool,
}

impl<O: Opponent> App<O> {
    /// Creates a new application around `game`.
    pub fn new(game: GameState<O>) -> Self {
        Self {
            game,
            cursor: Position::default(),
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState<O> {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Line shown under the board.
    ///
    /// A pending notice (such as a refused move) wins, then the round result,
    /// then a hint about whose turn it is.
    pub fn status_message(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        let snapshot = self.game.snapshot();
        if !snapshot.status().is_empty() {
            return format!("{} Press N for a new round.", snapshot.status());
        }
        match snapshot.to_move() {
            Player::X => "Your move".to_string(),
            Player::O => "Computer to move: C to let it reply, U to undo again".to_string(),
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = action_for(key) {
            self.handle_action(action);
        }
    }

    /// Applies a mapped action to the game.
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");
        self.message = None;

        match action {
            Action::Cursor(step) => self.cursor = self.cursor.step(step),
            Action::PlayCursor => self.play(self.cursor),
            Action::Play(position) => {
                self.cursor = position;
                self.play(position);
            }
            Action::Undo => {
                if let Err(e) = self.game.undo_last_move() {
                    self.message = Some(e.to_string());
                }
            }
            Action::ComputerMove => {
                if let Err(e) = self.game.apply_computer_move() {
                    self.message = Some(e.to_string());
                }
            }
            Action::NewRound => self.game.reset_round(),
            Action::Restart => self.game.reset_match(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, position: Position) {
        let snapshot: Snapshot = self.game.snapshot();
        if !snapshot.accepts_input() {
            // Board input is disabled until the round is reopened or reset.
            return;
        }
        match self.game.apply_player_move(position.to_index()) {
            Ok(outcome) => debug!(%position, %outcome, "Move played"),
            Err(e) => {
                warn!(error = %e, %position, "Move refused");
                self.message = Some(e.to_string());
            }
        }
    }
}
