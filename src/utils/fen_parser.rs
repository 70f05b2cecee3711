//! FEN-to-position parser.
//!
//! Structural problems (field count, rank widths, king count, side, castling,
//! en passant, unknown piece letters) reject the whole string, as does a
//! position where the side that just moved is left in check. The two
//! trailing counters are decoded independently so a caller can keep the
//! position when only a counter is malformed.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::board_location::BoardLocation;

#[derive(Debug)]
pub struct FenRecord {
    pub board: Board,
    pub active_color: Color,
    pub halfmove_clock: ChessResult<u32>,
    pub fullmove_number: ChessResult<u32>,
}

pub fn parse_fen(fen: &str) -> ChessResult<FenRecord> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let [board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        fields[..]
    else {
        return Err(ChessErrors::InvalidFen(format!(
            "expected 6 fields, found {}",
            fields.len()
        )));
    };

    let mut board = parse_board(board_part)?;
    let active_color = parse_side_to_move(side_part)?;
    board.castling_rights = parse_castling_rights(castling_part)?;
    board.en_passant = parse_en_passant_square(en_passant_part)?;

    // Otherwise the side to move could capture the king.
    let waiting = active_color.opposite();
    if is_in_check(&board, waiting) {
        return Err(ChessErrors::InvalidFen(format!(
            "{waiting} is in check but {active_color} is to move"
        )));
    }

    Ok(FenRecord {
        board,
        active_color,
        halfmove_clock: halfmove_part
            .parse::<u32>()
            .map_err(|_| ChessErrors::InvalidHalfmoveClock(halfmove_part.to_owned())),
        fullmove_number: fullmove_part
            .parse::<u32>()
            .map_err(|_| ChessErrors::InvalidFullmoveNumber(fullmove_part.to_owned())),
    })
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFen(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFen(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
            } else {
                let piece = Piece::from_fen_char(ch).ok_or(ChessErrors::InvalidFenPiece(ch))?;
                if file < 8 {
                    board.squares[rank_index * 8 + file] = Some(piece);
                }
                file += 1;
            }

            if file > 8 {
                return Err(ChessErrors::InvalidFen(format!("rank '{rank_str}' has more than 8 files")));
            }
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFen(format!("rank '{rank_str}' does not sum to 8 files")));
        }
    }

    for color in [Color::White, Color::Black] {
        let king = Some(Piece::new(PieceKind::King, color));
        let kings = board.squares.iter().filter(|square| **square == king).count();
        if kings != 1 {
            return Err(ChessErrors::InvalidFen(format!(
                "expected exactly one {color} king, found {kings}"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidFen(format!("invalid side-to-move field '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        rights |= match ch {
            'K' => CASTLE_WHITE_SHORT,
            'Q' => CASTLE_WHITE_LONG,
            'k' => CASTLE_BLACK_SHORT,
            'q' => CASTLE_BLACK_LONG,
            _ => {
                return Err(ChessErrors::InvalidFen(format!(
                    "invalid castling rights character '{ch}'"
                )))
            }
        };
    }
    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<usize>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    match BoardLocation::parse(en_passant_part) {
        Some(square) if matches!(square.rank(), '3' | '6') => Ok(Some(square.index())),
        _ => Err(ChessErrors::InvalidFen(format!(
            "invalid en-passant square '{en_passant_part}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn parse_starting_fen() {
        let record = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(record.board, Board::new_game());
        assert_eq!(record.active_color, Color::White);
        assert_eq!(record.halfmove_clock.expect("halfmove"), 0);
        assert_eq!(record.fullmove_number.expect("fullmove"), 1);
    }

    #[test]
    fn unknown_piece_letter_is_rejected() {
        let err = parse_fen("rnbqkbnr/pppppppp/8/8/4X3/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect_err("X is not a piece");
        assert!(matches!(err, ChessErrors::InvalidFenPiece('X')));
    }

    #[test]
    fn structural_errors_are_rejected() {
        let cases = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbq1bnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkz - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1",
        ];
        for fen in cases {
            let err = parse_fen(fen).expect_err("structurally invalid FEN");
            assert!(matches!(err, ChessErrors::InvalidFen(_)), "{fen}: {err}");
        }
    }

    #[test]
    fn waiting_side_in_check_is_rejected() {
        for fen in [
            "4k3/8/8/8/8/8/8/4QK2 w - - 0 1",
            "4k3/8/8/8/8/8/3p4/4K3 b - - 0 1",
            "4k3/8/3N4/8/8/8/8/4K3 w - - 0 1",
        ] {
            let err = parse_fen(fen).expect_err("the side to move could take the king");
            assert!(matches!(err, ChessErrors::InvalidFen(_)), "{fen}: {err}");
        }

        parse_fen("4k3/8/8/8/8/8/8/4QK2 b - - 0 1").expect("side to move may be in check");
    }

    #[test]
    fn malformed_counters_keep_position() {
        let record = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - x 7").expect("structure is valid");
        assert_eq!(record.active_color, Color::Black);
        assert!(matches!(record.halfmove_clock, Err(ChessErrors::InvalidHalfmoveClock(_))));
        assert_eq!(record.fullmove_number.expect("fullmove parses"), 7);
    }
}
