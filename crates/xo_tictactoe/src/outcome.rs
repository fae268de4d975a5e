//! Round outcome, derived from the board on demand.

use crate::rules;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// State of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Moves can still be made.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Board is full with no line.
    Tie,
}

impl RoundOutcome {
    /// Evaluates `board` against the rules.
    pub fn of(board: &Board) -> Self {
        if let Some(winner) = rules::check_winner(board) {
            RoundOutcome::Won(winner)
        } else if rules::is_full(board) {
            RoundOutcome::Tie
        } else {
            RoundOutcome::InProgress
        }
    }

    /// True once a round is won or tied.
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            RoundOutcome::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Status line shown to the human. Empty while the round is open.
    pub fn status_text(self) -> &'static str {
        match self {
            RoundOutcome::InProgress => "",
            RoundOutcome::Won(Player::X) => "You Win!",
            RoundOutcome::Won(Player::O) => "Computer Wins!",
            RoundOutcome::Tie => "It's a Tie!",
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::InProgress => write!(f, "In progress"),
            RoundOutcome::Won(player) => write!(f, "Player {} wins", player),
            RoundOutcome::Tie => write!(f, "Tie"),
        }
    }
}
