//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and as a no-dependency opponent.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, SearchBudget};
use crate::game_state::game_state::GameState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible move sequence for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        budget: &SearchBudget,
    ) -> ChessResult<Option<String>> {
        let legal_moves = game_state.legal_moves();
        debug!(legal_moves = legal_moves.len(), ?budget, "random engine choosing");

        Ok(legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .map(|mv| mv.to_coordinate_notation()))
    }
}
