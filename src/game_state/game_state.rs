//! Game state and status engine.
//!
//! `GameState` owns the board, turn, counters, histories, and clocks. Moves
//! enter through `apply_move` or `play_notation`; after each committed move
//! the status is re-derived for the side now to move. Terminal statuses are
//! never reverted, and `Quit` can be set from any state.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVES, REPETITION_COUNT};
use crate::game_state::time_control::TimeControl;
use crate::game_state::{board::Board, chess_types::*, game_status::GameStatus};
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::{
    self, validate_move, validate_promotion, IllegalMove,
};
use crate::move_generation::move_generator::{generate_legal_moves, generate_pseudo_legal_moves};
use crate::move_generation::move_matcher::find_matching_move;
use crate::moves::board_location::BoardLocation;
use crate::moves::chess_move::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::notation_parser::parse_notation;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub active_color: Color,

    // --- Counters ---
    pub halfmove_clock: u32,
    pub fullmove_number: u32,

    // --- Histories ---
    pub move_history: Vec<ChessMove>,
    /// Board before each committed move, oldest first.
    pub board_history: Vec<Board>,

    // --- Clocks ---
    pub white_time_remaining: Duration,
    pub black_time_remaining: Duration,
    pub increment: Duration,

    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    pub fn new_game() -> Self {
        let time_control = TimeControl::default();
        Self {
            board: Board::new_game(),
            active_color: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
            move_history: Vec::new(),
            board_history: Vec::new(),
            white_time_remaining: time_control.base,
            black_time_remaining: time_control.base,
            increment: time_control.increment,
            status: GameStatus::NotStarted,
        }
    }

    /// Builds a game from `fen`, rejecting it if any field is malformed.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let mut game_state = Self::new_game();
        game_state.load_fen(fen)?;
        Ok(game_state)
    }

    /// Replaces the position with `fen` and resets histories and status.
    ///
    /// A structurally invalid string leaves `self` untouched. A malformed
    /// halfmove or fullmove counter is reported after the position has been
    /// loaded; that counter keeps its default (0 or 1).
    pub fn load_fen(&mut self, fen: &str) -> ChessResult<()> {
        let record = parse_fen(fen)?;

        self.board = record.board;
        self.active_color = record.active_color;
        self.move_history.clear();
        self.board_history.clear();
        self.status = GameStatus::NotStarted;
        self.halfmove_clock = 0;
        self.fullmove_number = 1;

        let mut first_error = None;
        match record.halfmove_clock {
            Ok(value) => self.halfmove_clock = value,
            Err(err) => first_error = Some(err),
        }
        match record.fullmove_number {
            Ok(value) => self.fullmove_number = value,
            Err(err) => {
                first_error.get_or_insert(err);
            }
        }

        debug!(fen = %self.to_fen(), "loaded position");
        first_error.map_or(Ok(()), Err)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves from `NotStarted` to `Playing` and evaluates the loaded position.
    pub fn start_game(&mut self) {
        if self.status == GameStatus::NotStarted {
            self.set_status(GameStatus::Playing);
            self.update_status();
        }
    }

    pub fn quit(&mut self) {
        self.set_status(GameStatus::Quit);
    }

    pub fn agree_draw(&mut self) -> ChessResult<()> {
        self.ensure_playable()?;
        self.set_status(GameStatus::DrawAgreement);
        Ok(())
    }

    pub fn set_time_control(&mut self, time_control: TimeControl) {
        self.white_time_remaining = time_control.base;
        self.black_time_remaining = time_control.base;
        self.increment = time_control.increment;
    }

    pub fn time_remaining(&self, color: Color) -> Duration {
        match color {
            Color::White => self.white_time_remaining,
            Color::Black => self.black_time_remaining,
        }
    }

    fn time_remaining_mut(&mut self, color: Color) -> &mut Duration {
        match color {
            Color::White => &mut self.white_time_remaining,
            Color::Black => &mut self.black_time_remaining,
        }
    }

    /// Charges `elapsed` to the side to move. Running out of time while the
    /// game is in progress hands the win to the other side.
    pub fn record_elapsed(&mut self, elapsed: Duration) {
        if self.status != GameStatus::Playing {
            return;
        }
        let mover = self.active_color;
        let remaining = self.time_remaining_mut(mover);
        *remaining = remaining.saturating_sub(elapsed);
        if remaining.is_zero() {
            self.set_status(GameStatus::timeout_won_by(mover.opposite()));
        }
    }

    pub fn legal_moves(&self) -> Vec<ChessMove> {
        generate_legal_moves(&self.board, self.active_color)
    }

    pub fn legal_moves_for(&self, color: Color) -> Vec<ChessMove> {
        generate_legal_moves(&self.board, color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        legal_move_checks::is_in_check(&self.board, color)
    }

    pub fn move_history(&self) -> &[ChessMove] {
        &self.move_history
    }

    pub fn captured_pieces(&self) -> &[Piece] {
        &self.board.captured
    }

    /// Validates `mv` for the side to move and commits it.
    pub fn apply_move(&mut self, mv: ChessMove) -> ChessResult<()> {
        self.ensure_playable()?;
        let reachable = generate_pseudo_legal_moves(&self.board, self.active_color)
            .iter()
            .any(|candidate| {
                candidate.piece == mv.piece && candidate.from == mv.from && candidate.to == mv.to
            });
        if !reachable {
            return Err(IllegalMove::NoMatchingMove.into());
        }
        validate_move(&self.board, &mv, self.active_color)?;
        validate_promotion(&mv)?;
        self.commit_move(mv);
        Ok(())
    }

    /// Parses `notation`, resolves it against the legal moves, and commits it.
    pub fn play_notation(&mut self, notation: &str) -> ChessResult<ChessMove> {
        self.ensure_playable()?;
        let descriptor = parse_notation(notation)?;
        let mv = find_matching_move(&self.board, &descriptor, self.active_color)?;
        Ok(self.commit_move(mv))
    }

    /// Rejects moves once the game is over; starts a game that has not begun.
    fn ensure_playable(&mut self) -> ChessResult<()> {
        if self.status.is_terminal() {
            return Err(ChessErrors::GameNotInProgress(self.status));
        }
        self.start_game();
        if self.status.is_terminal() {
            return Err(ChessErrors::GameNotInProgress(self.status));
        }
        Ok(())
    }

    /// Applies an already-validated move and returns it with its capture flag set.
    fn commit_move(&mut self, mut mv: ChessMove) -> ChessMove {
        let mover = self.active_color;

        self.board_history.push(self.board.clone());
        mv.capture = apply_move_to_board(&mut self.board, &mv);

        if mv.piece == PieceKind::Pawn || mv.capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if mover == Color::Black {
            self.fullmove_number += 1;
        }

        let increment = self.increment;
        *self.time_remaining_mut(mover) += increment;

        self.move_history.push(mv);
        self.active_color = mover.opposite();

        debug!(mv = %mv, fen = %self.to_fen(), "applied move");
        self.update_status();
        mv
    }

    /// Re-derives the status for the side to move. Does nothing unless the
    /// game is in progress.
    pub fn update_status(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        if let Some(status) = self.evaluate_status() {
            self.set_status(status);
        }
    }

    fn evaluate_status(&self) -> Option<GameStatus> {
        let to_move = self.active_color;
        let in_check = self.is_in_check(to_move);

        if self.legal_moves().is_empty() {
            return Some(if in_check {
                GameStatus::checkmate_won_by(to_move.opposite())
            } else {
                GameStatus::DrawStalemate
            });
        }

        if !in_check && has_insufficient_material(&self.board) {
            return Some(GameStatus::DrawInsufficientMaterial);
        }

        if self.halfmove_clock == FIFTY_MOVE_HALFMOVES {
            return Some(GameStatus::DrawFiftyMoves);
        }

        if self.has_threefold_repetition() {
            return Some(GameStatus::DrawRepetition);
        }

        None
    }

    fn has_threefold_repetition(&self) -> bool {
        let mut occurrences: HashMap<&[Option<Piece>; 64], usize> = HashMap::new();
        let positions = self
            .board_history
            .iter()
            .map(|board| &board.squares)
            .chain(std::iter::once(&self.board.squares));
        for squares in positions {
            let count = occurrences.entry(squares).or_insert(0);
            *count += 1;
            if *count >= REPETITION_COUNT {
                return true;
            }
        }
        false
    }

    fn set_status(&mut self, status: GameStatus) {
        if self.status == status {
            return;
        }
        info!(from = ?self.status, to = ?status, "game status changed");
        self.status = status;
    }
}

/// K v K, K+minor v K, and K+B v K+B with both bishops on one square color.
fn has_insufficient_material(board: &Board) -> bool {
    let others: Vec<(BoardLocation, Piece)> = board
        .pieces()
        .filter(|(_, piece)| piece.kind != PieceKind::King)
        .collect();

    match others.as_slice() {
        [] => true,
        [(_, piece)] => matches!(piece.kind, PieceKind::Bishop | PieceKind::Knight),
        [(first_square, first), (second_square, second)] => {
            first.kind == PieceKind::Bishop
                && second.kind == PieceKind::Bishop
                && first.color != second.color
                && first_square.is_light_square() == second_square.is_light_square()
        }
        _ => false,
    }
}
