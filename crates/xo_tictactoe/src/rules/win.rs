//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning triples: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `player` fully occupies any winning triple.
#[instrument(skip(board))]
pub fn detect_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Returns the first triple fully occupied by `player`, in [`LINES`] order.
pub fn winning_line(board: &Board, player: Player) -> Option<[usize; 3]> {
    let mark = Some(Square::Occupied(player));
    LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&i| board.get(i) == mark))
}

/// Returns the winner if either player has three in a row.
///
/// X is checked first; a legal game never has two winners.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| detect_win(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(i, p) in marks {
            board.set(i, Square::Occupied(p));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!detect_win(&board, Player::X));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let marks: Vec<_> = line.iter().map(|&i| (i, Player::O)).collect();
            let board = board_with(&marks);
            assert!(detect_win(&board, Player::O), "line {:?}", line);
            assert!(!detect_win(&board, Player::X));
            assert_eq!(winning_line(&board, Player::O), Some(line));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::O)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_reported_when_two_complete() {
        // X X X / X . . / X . .  -> top row precedes the left column
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(winning_line(&board, Player::X), Some([0, 1, 2]));
    }
}
