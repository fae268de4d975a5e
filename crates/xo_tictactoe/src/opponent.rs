//! Computer opponents.

use crate::types::Board;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Something that picks a cell for the computer side.
pub trait Opponent {
    /// Chooses an empty cell on `board`, or `None` if the board is full.
    fn choose(&mut self, board: &Board) -> Option<usize>;

    /// Display name.
    fn name(&self) -> &str;
}

/// Picks uniformly at random among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    /// Wraps an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomOpponent<ChaCha8Rng> {
    /// Deterministic opponent for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, otherwise drawn from OS entropy.
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(ChaCha8Rng::from_entropy()),
        }
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    #[instrument(skip_all)]
    fn choose(&mut self, board: &Board) -> Option<usize> {
        let choice = board.empty_cells().choose(&mut self.rng).copied();
        debug!(?choice, "Random opponent chose cell");
        choice
    }

    fn name(&self) -> &str {
        "Computer"
    }
}
