//! Cumulative match score.

use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Wins per side, kept across rounds until the match is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won by the human (X).
    player_wins: u32,
    /// Rounds won by the computer (O).
    computer_wins: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.player_wins,
            Player::O => self.computer_wins,
        }
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.player_wins += 1,
            Player::O => self.computer_wins += 1,
        }
    }

    pub(crate) fn revoke_win(&mut self, player: Player) {
        match player {
            Player::X => self.player_wins = self.player_wins.saturating_sub(1),
            Player::O => self.computer_wins = self.computer_wins.saturating_sub(1),
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player: {}  Computer: {}",
            self.player_wins, self.computer_wins
        )
    }
}

/// What undoing a winning move does to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorePolicy {
    /// Undoing the winning move takes the win back.
    #[default]
    RollBack,
    /// The win stays on the board even though the round reopens.
    Keep,
}
