//! Read-only view of the game for the presentation layer.

use crate::outcome::RoundOutcome;
use crate::score::Score;
use crate::types::{CELL_COUNT, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Cells to emphasize once a round has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Highlight {
    /// Nothing to emphasize.
    #[default]
    None,
    /// The winning triple.
    Line([usize; 3]),
    /// Every cell (tie).
    All,
}

impl Highlight {
    /// True if cell `index` should be emphasized.
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Highlight::None => false,
            Highlight::Line(line) => line.contains(&index),
            Highlight::All => index < CELL_COUNT,
        }
    }
}

/// State of one frame: board, turn, score, outcome and what to highlight.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Snapshot {
    /// Cells in row-major order.
    board: [Square; CELL_COUNT],
    /// Player to move.
    to_move: Player,
    /// Match score.
    score: Score,
    /// Round outcome.
    outcome: RoundOutcome,
    /// Whether undo is available.
    can_undo: bool,
    /// Cells to emphasize.
    highlight: Highlight,
}

impl Snapshot {
    /// Cell input is accepted only while the round is open and X is to move.
    pub fn accepts_input(&self) -> bool {
        !self.outcome.is_terminal() && self.to_move == Player::X
    }

    /// Result line: "You Win!", "Computer Wins!", "It's a Tie!" or empty.
    pub fn status(&self) -> &'static str {
        self.outcome.status_text()
    }

    /// Score line, e.g. `Player: 2  Computer: 1`.
    pub fn score_text(&self) -> String {
        self.score.to_string()
    }
}
