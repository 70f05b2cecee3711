//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the interactive binary and for
//! test diagnostics. Layout only; nothing here touches game rules.

use crate::game_state::{board::Board, chess_types::*, game_state::GameState};
use crate::game_state::time_control::format_clock;

const FILE_LABELS: &str = "  a b c d e f g h";
const FILE_LABELS_ROTATED: &str = "  h g f e d c b a";

/// Render the board with White at the bottom, or Black when `rotated`.
pub fn render_board(board: &Board, rotated: bool) -> String {
    let labels = if rotated { FILE_LABELS_ROTATED } else { FILE_LABELS };
    let mut out = String::new();

    out.push_str(labels);
    out.push('\n');

    for row in 0..8 {
        let rank_row = if rotated { 7 - row } else { row };
        let rank_label = char::from(b'8' - rank_row as u8);
        out.push(rank_label);
        out.push(' ');

        for column in 0..8 {
            let file = if rotated { 7 - column } else { column };
            match board.piece_at(rank_row * 8 + file) {
                Some(piece) => out.push(piece.glyph()),
                None => out.push('·'),
            }

            if column < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str(labels);
    out
}

/// Board plus captured pieces, clocks, turn, and status.
pub fn render_game_state(game_state: &GameState, rotated: bool) -> String {
    let mut out = render_board(&game_state.board, rotated);
    out.push('\n');

    for color in [Color::White, Color::Black] {
        let captured: String = game_state
            .captured_pieces()
            .iter()
            .filter(|piece| piece.color == color.opposite())
            .map(|piece| piece.glyph())
            .collect();
        out.push_str(&format!(
            "\n{:<5} {}  captured: {}",
            color.name(),
            format_clock(game_state.time_remaining(color)),
            captured
        ));
    }

    out.push_str(&format!(
        "\n{} to move, move {}. {}",
        game_state.active_color, game_state.fullmove_number, game_state.status()
    ));
    if let Some(last) = game_state.move_history().last() {
        out.push_str(&format!("\nlast move: {}", last.describe()));
    }
    out
}
