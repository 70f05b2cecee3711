//! Game lifecycle status.

use std::fmt;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Playing,
    CheckmateWhiteWins,
    CheckmateBlackWins,
    TimeoutWhiteWins,
    TimeoutBlackWins,
    DrawInsufficientMaterial,
    DrawStalemate,
    DrawRepetition,
    DrawFiftyMoves,
    DrawAgreement,
    Quit,
}

impl GameStatus {
    /// Every status other than `NotStarted` and `Playing` ends the game.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::NotStarted | GameStatus::Playing)
    }

    pub fn checkmate_won_by(winner: Color) -> Self {
        match winner {
            Color::White => GameStatus::CheckmateWhiteWins,
            Color::Black => GameStatus::CheckmateBlackWins,
        }
    }

    pub fn timeout_won_by(winner: Color) -> Self {
        match winner {
            Color::White => GameStatus::TimeoutWhiteWins,
            Color::Black => GameStatus::TimeoutBlackWins,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::CheckmateWhiteWins | GameStatus::TimeoutWhiteWins => Some(Color::White),
            GameStatus::CheckmateBlackWins | GameStatus::TimeoutBlackWins => Some(Color::Black),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GameStatus::NotStarted => "Game not started",
            GameStatus::Playing => "Game in progress",
            GameStatus::CheckmateWhiteWins => "Checkmate! White wins",
            GameStatus::CheckmateBlackWins => "Checkmate! Black wins",
            GameStatus::TimeoutWhiteWins => "Black ran out of time, White wins",
            GameStatus::TimeoutBlackWins => "White ran out of time, Black wins",
            GameStatus::DrawInsufficientMaterial => "Draw by insufficient material",
            GameStatus::DrawStalemate => "Draw by stalemate",
            GameStatus::DrawRepetition => "Draw by threefold repetition",
            GameStatus::DrawFiftyMoves => "Draw by the fifty-move rule",
            GameStatus::DrawAgreement => "Draw by agreement",
            GameStatus::Quit => "Game abandoned",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
