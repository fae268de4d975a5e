//! Tie detection logic for tic-tac-toe.

use super::win::detect_win;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board on which neither player has a line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && !detect_win(board, Player::X) && !detect_win(board, Player::O)
}
