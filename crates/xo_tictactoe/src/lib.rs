//! Tic-tac-toe game logic for a human (X) against a random computer (O).
//!
//! [`GameState`] owns the board, turn order, move history and match score. A
//! presentation layer drives it through the command methods and renders from
//! [`Snapshot`]s.
//!
//! # Example
//!
//! ```
//! use xo_tictactoe::{GameState, Player, RandomOpponent, RoundOutcome};
//!
//! let mut game = GameState::new(RandomOpponent::seeded(7));
//! let outcome = game.apply_player_move(4)?;
//!
//! // The computer has already replied.
//! assert_eq!(outcome, RoundOutcome::InProgress);
//! assert_eq!(game.history().len(), 2);
//! assert_eq!(game.to_move(), Player::X);
//! # Ok::<(), xo_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod invariants;
mod opponent;
mod outcome;
mod position;
pub mod rules;
mod score;
mod snapshot;
mod types;

pub use error::{GameError, InvalidMove};
pub use game::GameState;
pub use invariants::{
    GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant,
};
pub use opponent::{Opponent, RandomOpponent};
pub use outcome::RoundOutcome;
pub use position::{Position, Step};
pub use score::{Score, ScorePolicy};
pub use snapshot::{Highlight, Snapshot};
pub use types::{Board, CELL_COUNT, Player, Square};
