use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::board_location::BoardLocation;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = &game_state.board;
    format!(
        "{} {} {} {} {} {}",
        generate_board_field(&board.squares),
        game_state.active_color.fen_char(),
        generate_castling_field(board.castling_rights),
        generate_en_passant_field(board.en_passant),
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

/// Piece placement field only, ranks 8 down to 1.
pub fn generate_board_field(squares: &[Option<Piece>; 64]) -> String {
    let mut out = String::with_capacity(72);

    for (rank_index, rank) in squares.chunks(8).enumerate() {
        let mut empty_count = 0u8;

        for square in rank {
            match square {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank_index < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(castling_rights: CastlingRights) -> String {
    let mut out = String::new();
    for (right, ch) in [
        (CASTLE_WHITE_SHORT, 'K'),
        (CASTLE_WHITE_LONG, 'Q'),
        (CASTLE_BLACK_SHORT, 'k'),
        (CASTLE_BLACK_LONG, 'q'),
    ] {
        if castling_rights & right != 0 {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn generate_en_passant_field(en_passant: Option<usize>) -> String {
    en_passant
        .map(|index| BoardLocation::from_index(index).to_string())
        .unwrap_or_else(|| "-".to_owned())
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;

    #[test]
    fn round_trips_reference_positions() {
        let fens = [
            STARTING_POSITION_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
            "6k1/b7/8/8/5p2/7p/7P/7K w - - 0 54",
        ];
        for fen in fens {
            let game_state = GameState::from_fen(fen).expect("reference FEN should parse");
            assert_eq!(game_state.to_fen(), fen);
        }
    }

    #[test]
    fn reached_position_round_trips_board() {
        let mut game_state = GameState::new_game();
        game_state.start_game();
        for notation in ["e4", "c5", "Nf3", "d6", "Bb5", "Bd7", "o-o"] {
            game_state.play_notation(notation).expect("opening move should be legal");
        }

        let reloaded = GameState::from_fen(&game_state.to_fen()).expect("generated FEN should parse");
        assert_eq!(reloaded.board.squares, game_state.board.squares);
        assert_eq!(reloaded.board.castling_rights, game_state.board.castling_rights);
        assert_eq!(reloaded.to_fen(), game_state.to_fen());
    }
}
