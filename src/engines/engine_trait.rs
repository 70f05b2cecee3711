//! Search-collaborator abstraction.
//!
//! The game hands an engine the current position and a budget; the engine
//! answers with move notation that goes through the same parser and matcher
//! as typed input.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;

pub const DEFAULT_MOVETIME_MS: u64 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchBudget {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
}

impl SearchBudget {
    pub fn movetime(movetime_ms: u64) -> Self {
        Self {
            depth: None,
            movetime_ms: Some(movetime_ms),
        }
    }
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) -> ChessResult<()> {
        Ok(())
    }

    /// Notation for the chosen move, or `None` when the engine has no move.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        budget: &SearchBudget,
    ) -> ChessResult<Option<String>>;
}
