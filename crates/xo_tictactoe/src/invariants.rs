//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every operation.
//! They are checked in debug builds and can be tested independently.

use crate::game::GameState;
use crate::opponent::Opponent;
use crate::types::{CELL_COUNT, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S: ?Sized> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S: ?Sized, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X opens every round, so O never leads and X leads by at most one.
pub struct MarkBalanceInvariant;

impl<O: Opponent> Invariant<GameState<O>> for MarkBalanceInvariant {
    fn holds(game: &GameState<O>) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        o <= x && x - o <= 1
    }

    fn description() -> &'static str {
        "O-count <= X-count <= O-count + 1"
    }
}

/// Every history entry matches exactly one occupied cell.
pub struct HistoryConsistentInvariant;

impl<O: Opponent> Invariant<GameState<O>> for HistoryConsistentInvariant {
    fn holds(game: &GameState<O>) -> bool {
        let history = game.history();
        let mut seen = [false; CELL_COUNT];
        let distinct = history.iter().all(|&i| {
            let fresh = i < CELL_COUNT && !seen[i] && !game.board().is_empty(i);
            if i < CELL_COUNT {
                seen[i] = true;
            }
            fresh
        });
        distinct && history.len() == game.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (MarkBalanceInvariant, HistoryConsistentInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomOpponent;
    use crate::types::Square;

    #[test]
    fn test_invariants_hold_for_new_game() {
        let game = GameState::new(RandomOpponent::seeded(0));
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut game = GameState::new(RandomOpponent::seeded(5));
        game.apply_player_move(4).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_detects_unrecorded_mark() {
        let mut game = GameState::new(RandomOpponent::seeded(0));
        game.board_mut().set(0, Square::Occupied(Player::O));

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(!HistoryConsistentInvariant::holds(&game));
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}
