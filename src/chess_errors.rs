//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by notation parsing, move
//! matching, FEN decoding, the game state, and the engine adapters. Every
//! variant is recoverable: the caller reports the message and the game state
//! is left as it was. The only fatal condition in the crate is a board with a
//! missing king, which panics instead of producing an error.

use std::io;

use thiserror::Error;

use crate::game_state::game_status::GameStatus;
use crate::move_generation::legal_move_checks::IllegalMove;

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Debug, Error)]
pub enum ChessErrors {
    #[error("empty move notation")]
    EmptyNotation,

    /// The tokenizer hit a character outside the notation alphabet.
    #[error("unrecognized character '{0}' in move notation")]
    UnrecognizedNotation(char),

    /// The token sequence matched no grammar row.
    #[error("could not understand move notation '{0}'")]
    UnmatchedNotation(String),

    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    /// More than one legal move fits the notation; payload lists candidates.
    #[error("ambiguous move, candidates: {0}")]
    AmbiguousMove(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid FEN piece letter '{0}'")]
    InvalidFenPiece(char),

    #[error("invalid FEN halfmove clock '{0}'")]
    InvalidHalfmoveClock(String),

    #[error("invalid FEN fullmove number '{0}'")]
    InvalidFullmoveNumber(String),

    #[error("game is not in progress ({0})")]
    GameNotInProgress(GameStatus),

    #[error("invalid time control '{0}', expected <base>|<increment> such as 15m|5s")]
    InvalidTimeControl(String),

    #[error("engine error: {0}")]
    Engine(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ChessErrors {
    /// Notation that could not be tokenized or matched against the grammar.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ChessErrors::EmptyNotation
                | ChessErrors::UnrecognizedNotation(_)
                | ChessErrors::UnmatchedNotation(_)
        )
    }

    pub fn is_fen_error(&self) -> bool {
        matches!(
            self,
            ChessErrors::InvalidFen(_)
                | ChessErrors::InvalidFenPiece(_)
                | ChessErrors::InvalidHalfmoveClock(_)
                | ChessErrors::InvalidFullmoveNumber(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = ChessErrors::from(IllegalMove::KingLeftInCheck);
        assert_eq!(err.to_string(), "illegal move: move leaves the king in check");
        assert!(!err.is_parse_error());

        let err = ChessErrors::UnrecognizedNotation('z');
        assert!(err.is_parse_error());
        assert!(ChessErrors::InvalidFenPiece('x').is_fen_error());
    }
}
