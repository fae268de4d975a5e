//! Errors returned by game operations.
//!
//! Every error leaves the game state untouched.

use crate::types::Player;

/// Reason a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// Index outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),

    /// The round is already won or tied.
    #[display("Round is already over")]
    RoundOver,

    /// The other side is to move.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Player),
}

/// Error that can occur when applying a game operation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// The requested move breaks the rules.
    #[display("Invalid move: {}", _0)]
    #[from]
    InvalidMove(InvalidMove),

    /// Undo was requested with no moves recorded.
    #[display("No moves to undo")]
    EmptyHistory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err: GameError = InvalidMove::Occupied(4).into();
        assert_eq!(err.to_string(), "Invalid move: Cell 4 is already occupied");
        assert_eq!(GameError::EmptyHistory.to_string(), "No moves to undo");
        assert_eq!(
            InvalidMove::NotYourTurn(Player::X).to_string(),
            "It's not X's turn"
        );
    }
}
