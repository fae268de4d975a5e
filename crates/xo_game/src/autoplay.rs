//! Headless play: a random stand-in for the human against the computer.

use crate::config::AppConfig;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use xo_tictactoe::{
    GameError, GameState, InvalidMove, Opponent, Player, RandomOpponent, RoundOutcome,
};

/// Tally of an autoplay run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct AutoplayReport {
    /// Rounds played.
    rounds: u32,
    /// Rounds won by X.
    player_wins: u32,
    /// Rounds won by O.
    computer_wins: u32,
    /// Drawn rounds.
    ties: u32,
}

/// Plays `rounds` full rounds and reports the results.
///
/// With a configured seed the run is reproducible; the stand-in human uses the
/// next seed so the two sides do not mirror each other.
#[instrument(skip(config), fields(seed = ?config.seed()))]
pub fn run(config: &AppConfig, rounds: u32) -> Result<AutoplayReport, GameError> {
    let seed = *config.seed();
    let mut human = RandomOpponent::from_seed_or_entropy(seed.map(|s| s.wrapping_add(1)));
    let mut game = GameState::with_policy(
        RandomOpponent::from_seed_or_entropy(seed),
        *config.score_on_undo(),
    );
    let mut report = AutoplayReport::default();

    for round in 0..rounds {
        let winner = loop {
            let cell = human
                .choose(game.board())
                .ok_or(InvalidMove::RoundOver)?;
            match game.apply_player_move(cell)? {
                RoundOutcome::Won(player) => break Some(player),
                RoundOutcome::Tie => break None,
                RoundOutcome::InProgress => {}
            }
        };
        debug!(
            round,
            outcome = %game.outcome(),
            board = %game.board().display(),
            "Round finished"
        );

        report.rounds += 1;
        match winner {
            Some(Player::X) => report.player_wins += 1,
            Some(Player::O) => report.computer_wins += 1,
            None => report.ties += 1,
        }
        game.reset_round();
    }

    debug_assert_eq!(*game.score().player_wins(), report.player_wins);
    info!(?report, "Autoplay finished");
    Ok(report)
}
