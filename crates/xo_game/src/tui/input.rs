//! Keyboard mapping.

use crossterm::event::KeyCode;
use xo_tictactoe::{Position, Step};

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Step),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a specific cell (keys 1-9).
    Play(Position),
    /// Take back one ply.
    Undo,
    /// Let the computer reply after an undo removed its move.
    ///
    /// Only applies while an undo has left O to move; otherwise the game
    /// refuses it and the board is unchanged.
    ComputerMove,
    /// Clear the board, keep the score.
    NewRound,
    /// Zero the score and clear the board.
    Restart,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action, if it has one.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Up | KeyCode::Char('k') => Action::Cursor(Step::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Cursor(Step::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::Cursor(Step::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Cursor(Step::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        KeyCode::Char(c @ '1'..='9') => Action::Play(Position::parse(&c.to_string())?),
        KeyCode::Char('u') | KeyCode::Backspace => Action::Undo,
        KeyCode::Char('c') => Action::ComputerMove,
        KeyCode::Char('n') => Action::NewRound,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(
            action_for(KeyCode::Char('1')),
            Some(Action::Play(Position::TopLeft))
        );
        assert_eq!(
            action_for(KeyCode::Char('9')),
            Some(Action::Play(Position::BottomRight))
        );
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_arrows_move_cursor() {
        assert_eq!(action_for(KeyCode::Left), Some(Action::Cursor(Step::Left)));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Tab), None);
    }
}
