//! The game state: board, turn order, move history and score.

use crate::error::{GameError, InvalidMove};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::opponent::{Opponent, RandomOpponent};
use crate::outcome::RoundOutcome;
use crate::rules;
use crate::score::{Score, ScorePolicy};
use crate::snapshot::{Highlight, Snapshot};
use crate::types::{Board, CELL_COUNT, Player, Square};
use tracing::{debug, info, instrument};

/// Human-versus-computer tic-tac-toe.
///
/// Owns everything that changes during play. The presentation layer calls the
/// command methods in response to input and renders from [`GameState::snapshot`].
///
/// A player move and the computer's reply form one action: when
/// [`apply_player_move`](Self::apply_player_move) leaves the round open, the
/// opponent answers before the call returns.
#[derive(Debug, Clone)]
pub struct GameState<O = RandomOpponent> {
    board: Board,
    to_move: Player,
    history: Vec<usize>,
    score: Score,
    policy: ScorePolicy,
    opponent: O,
}

impl<O: Opponent> GameState<O> {
    /// Starts a match with the default score policy.
    #[instrument(skip(opponent), fields(opponent = opponent.name()))]
    pub fn new(opponent: O) -> Self {
        Self::with_policy(opponent, ScorePolicy::default())
    }

    /// Starts a match with an explicit score-on-undo policy.
    #[instrument(skip(opponent), fields(opponent = opponent.name()))]
    pub fn with_policy(opponent: O, policy: ScorePolicy) -> Self {
        debug!("Creating game state");
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::with_capacity(CELL_COUNT),
            score: Score::new(),
            policy,
            opponent,
        }
    }

    /// Builds a round by placing `moves` for X and O alternately, starting with X.
    ///
    /// The opponent is not consulted, so any reachable position can be set up.
    /// Wins reached along the way are scored as usual.
    #[instrument(skip(opponent))]
    pub fn from_moves(opponent: O, moves: &[usize]) -> Result<Self, GameError> {
        let mut game = Self::new(opponent);
        for &index in moves {
            let player = game.to_move;
            game.place(player, index)?;
        }
        Ok(game)
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move history (cell indices, oldest first).
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the match score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the score-on-undo policy.
    pub fn policy(&self) -> ScorePolicy {
        self.policy
    }

    /// Returns the computer opponent.
    pub fn opponent(&self) -> &O {
        &self.opponent
    }

    /// Current outcome, evaluated from the board.
    pub fn outcome(&self) -> RoundOutcome {
        RoundOutcome::of(&self.board)
    }

    /// True when there is a move to undo.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// True if `player` holds a full line.
    pub fn detect_win(&self, player: Player) -> bool {
        rules::detect_win(&self.board, player)
    }

    /// True if the board is full and nobody has a line.
    pub fn detect_tie(&self) -> bool {
        rules::is_tie(&self.board)
    }

    /// Everything the presentation layer needs to draw one frame.
    pub fn snapshot(&self) -> Snapshot {
        let outcome = self.outcome();
        let highlight = match outcome {
            RoundOutcome::Won(winner) => rules::winning_line(&self.board, winner)
                .map(Highlight::Line)
                .unwrap_or(Highlight::None),
            RoundOutcome::Tie => Highlight::All,
            RoundOutcome::InProgress => Highlight::None,
        };
        Snapshot::new(
            *self.board.squares(),
            self.to_move,
            self.score,
            outcome,
            self.can_undo(),
            highlight,
        )
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Plays X at `index`; if the round stays open the computer replies at once.
    ///
    /// Returns the outcome after the whole action.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidMove`] for an out-of-range index, an occupied cell,
    /// a finished round, or when O is to move. State is unchanged on error.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_player_move(&mut self, index: usize) -> Result<RoundOutcome, GameError> {
        let outcome = self.place(Player::X, index)?;
        if outcome.is_terminal() {
            return Ok(outcome);
        }
        self.apply_computer_move()
    }

    /// Lets the opponent place O on a uniformly chosen empty cell.
    ///
    /// Only valid while the round is open and O is to move, which normally
    /// happens inside [`apply_player_move`](Self::apply_player_move) or after
    /// an undo removed the computer's last reply.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_computer_move(&mut self) -> Result<RoundOutcome, GameError> {
        self.check_can_move(Player::O)?;
        let index = self
            .opponent
            .choose(&self.board)
            .ok_or(InvalidMove::RoundOver)?;
        debug!(index, opponent = self.opponent.name(), "Computer reply");
        self.place(Player::O, index)
    }

    /// Takes back exactly one ply and returns the cleared cell.
    ///
    /// The player whose mark was removed moves next and a finished round is
    /// reopened. Under [`ScorePolicy::RollBack`] undoing the winning ply also
    /// takes back the win.
    ///
    /// # Errors
    ///
    /// [`GameError::EmptyHistory`] when no move has been made this round.
    #[instrument(skip(self))]
    pub fn undo_last_move(&mut self) -> Result<usize, GameError> {
        let outcome = self.outcome();
        let index = self.history.pop().ok_or(GameError::EmptyHistory)?;
        let mover = self
            .board
            .get(index)
            .and_then(Square::player)
            .unwrap_or_else(|| self.to_move.opponent());

        self.board.set(index, Square::Empty);
        self.to_move = mover;

        if let RoundOutcome::Won(winner) = outcome
            && self.policy == ScorePolicy::RollBack
        {
            self.score.revoke_win(winner);
            info!(%winner, score = %self.score, "Winning move undone, win revoked");
        }

        debug!(index, %mover, remaining = self.history.len(), "Move undone");
        self.debug_check_invariants();
        Ok(index)
    }

    /// Clears the board and history for a new round. X moves first; score stays.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.board.clear();
        self.history.clear();
        self.to_move = Player::X;
        info!(score = %self.score, "New round");
    }

    /// Zeroes the score and starts a new round.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.score.clear();
        info!("Match reset");
        self.reset_round();
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    fn check_can_move(&self, player: Player) -> Result<(), InvalidMove> {
        if self.outcome().is_terminal() {
            return Err(InvalidMove::RoundOver);
        }
        if self.to_move != player {
            return Err(InvalidMove::NotYourTurn(player));
        }
        Ok(())
    }

    /// Validates and applies one ply, scoring a win and passing the turn.
    fn place(&mut self, player: Player, index: usize) -> Result<RoundOutcome, GameError> {
        if index >= CELL_COUNT {
            return Err(InvalidMove::OutOfRange(index).into());
        }
        self.check_can_move(player)?;
        if !self.board.is_empty(index) {
            return Err(InvalidMove::Occupied(index).into());
        }

        self.board.set(index, Square::Occupied(player));
        self.history.push(index);

        let outcome = self.outcome();
        match outcome {
            RoundOutcome::Won(winner) => {
                self.score.record_win(winner);
                info!(%winner, index, score = %self.score, "Round won");
            }
            RoundOutcome::Tie => info!(index, "Round tied"),
            RoundOutcome::InProgress => {
                self.to_move = player.opponent();
                debug!(%player, index, "Move applied");
            }
        }

        self.debug_check_invariants();
        Ok(outcome)
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(self)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Game invariant violated: {}", descriptions);
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState<RandomOpponent> {
    fn default() -> Self {
        Self::new(RandomOpponent::from_seed_or_entropy(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Opponent that always answers with a fixed cell order.
    struct Scripted(Vec<usize>);

    impl Opponent for Scripted {
        fn choose(&mut self, board: &Board) -> Option<usize> {
            let pos = self.0.iter().position(|&i| board.is_empty(i))?;
            Some(self.0.remove(pos))
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn test_player_move_triggers_reply() {
        let mut game = GameState::new(Scripted(vec![4]));
        let outcome = game.apply_player_move(0).unwrap();
        assert_eq!(outcome, RoundOutcome::InProgress);
        assert_eq!(game.history(), &[0, 4]);
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_computer_can_win() {
        // X: 0, 1  O: 3, 4 ; X plays 8, computer completes 3-4-5
        let mut game = GameState::from_moves(Scripted(vec![5]), &[0, 3, 1, 4]).unwrap();
        let outcome = game.apply_player_move(8).unwrap();
        assert_eq!(outcome, RoundOutcome::Won(Player::O));
        assert_eq!(game.score().wins(Player::O), 1);
        assert_eq!(game.score().wins(Player::X), 0);
        assert_eq!(game.snapshot().highlight(), &Highlight::Line([3, 4, 5]));
    }

    #[test]
    fn test_undo_computer_win_rolls_back_and_leaves_o_to_move() {
        let mut game = GameState::from_moves(Scripted(vec![5]), &[0, 3, 1, 4]).unwrap();
        game.apply_player_move(8).unwrap();

        assert_eq!(game.undo_last_move(), Ok(5));
        assert_eq!(game.outcome(), RoundOutcome::InProgress);
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.score().wins(Player::O), 0);
        assert_eq!(game.snapshot().highlight(), &Highlight::None);
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let mut game = GameState::from_moves(Scripted(vec![]), &[0, 4]).unwrap();
        let before = (game.board().clone(), game.history().to_vec(), game.to_move());

        assert_eq!(
            game.apply_player_move(9),
            Err(GameError::InvalidMove(InvalidMove::OutOfRange(9)))
        );
        assert_eq!(
            game.apply_player_move(4),
            Err(GameError::InvalidMove(InvalidMove::Occupied(4)))
        );
        assert_eq!(
            game.apply_computer_move(),
            Err(GameError::InvalidMove(InvalidMove::NotYourTurn(Player::O)))
        );
        assert_eq!(
            (game.board().clone(), game.history().to_vec(), game.to_move()),
            before
        );
    }

    #[test]
    fn test_undo_after_reply_leaves_computer_to_move() {
        let mut game = GameState::new(Scripted(vec![4, 8]));
        game.apply_player_move(0).unwrap();

        assert_eq!(game.undo_last_move(), Ok(4));
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(
            game.apply_player_move(1),
            Err(GameError::InvalidMove(InvalidMove::NotYourTurn(Player::X)))
        );

        // Computer replies again from the script.
        game.apply_computer_move().unwrap();
        assert_eq!(game.history(), &[0, 8]);
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_keep_policy_leaves_score() {
        let mut game = GameState::with_policy(Scripted(vec![]), ScorePolicy::Keep);
        for index in [0, 3, 1, 4] {
            let player = game.to_move();
            game.place(player, index).unwrap();
        }
        game.apply_player_move(2).unwrap();
        assert_eq!(game.score().wins(Player::X), 1);

        game.undo_last_move().unwrap();
        assert_eq!(game.outcome(), RoundOutcome::InProgress);
        assert_eq!(game.score().wins(Player::X), 1);
    }
}
