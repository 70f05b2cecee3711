//! Closed grammar for typed move commands.
//!
//! Each accepted form is one row of a table keyed on the token sequence.
//! There is no recursion and no backtracking: a sequence either matches a
//! row exactly or is rejected.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::moves::board_location::BoardLocation;
use crate::moves::chess_move::MoveDescriptor;
use crate::utils::notation_tokenizer::{tokenize_notation, NotationToken};

/// Parses `text` into a possibly partial move descriptor.
pub fn parse_notation(text: &str) -> ChessResult<MoveDescriptor> {
    let tokens = tokenize_notation(text)?;
    if tokens.is_empty() {
        return Err(ChessErrors::EmptyNotation);
    }
    descriptor_from_tokens(&tokens).ok_or_else(|| ChessErrors::UnmatchedNotation(text.trim().to_owned()))
}

pub fn descriptor_from_tokens(tokens: &[NotationToken]) -> Option<MoveDescriptor> {
    use NotationToken::*;

    let descriptor = match *tokens {
        // e4
        [Square(dst)] => pawn_to(dst),
        // o-o
        [ShortCastle] => castle('g'),
        // o-o-o
        [LongCastle] => castle('c'),
        // Nf3
        [Piece(piece), Square(dst)] => piece_to(piece, dst),
        // e2e4
        [Square(src), Square(dst)] => from_to(None, src, dst),
        // e8Q
        [Square(dst), Piece(promotion)] => promote(pawn_to(dst), promotion),
        // e8=Q
        [Square(dst), Promote, Piece(promotion)] => promote(pawn_to(dst), promotion),
        // exd5
        [File(file), Capture, Square(dst)] => pawn_capture(file, dst),
        // Rxf8
        [Piece(piece), Capture, Square(dst)] => piece_to(piece, dst),
        // Rdf8
        [Piece(piece), File(file), Square(dst)] => MoveDescriptor {
            src_file: Some(file),
            ..piece_to(piece, dst)
        },
        // R1a3
        [Piece(piece), Rank(rank), Square(dst)] => MoveDescriptor {
            src_rank: Some(rank),
            ..piece_to(piece, dst)
        },
        // Qh4e1
        [Piece(piece), Square(src), Square(dst)] => from_to(Some(piece), src, dst),
        // e7e8Q
        [Square(src), Square(dst), Piece(promotion)] => promote(from_to(None, src, dst), promotion),
        // Qh4xe1
        [Piece(piece), Square(src), Capture, Square(dst)] => from_to(Some(piece), src, dst),
        // Ndxc5
        [Piece(piece), File(file), Capture, Square(dst)] => MoveDescriptor {
            src_file: Some(file),
            ..piece_to(piece, dst)
        },
        // N3xc5
        [Piece(piece), Rank(rank), Capture, Square(dst)] => MoveDescriptor {
            src_rank: Some(rank),
            ..piece_to(piece, dst)
        },
        // exd8Q
        [File(file), Capture, Square(dst), Piece(promotion)] => {
            promote(pawn_capture(file, dst), promotion)
        }
        // e7e8=Q
        [Square(src), Square(dst), Promote, Piece(promotion)] => {
            promote(from_to(None, src, dst), promotion)
        }
        // exd8=Q
        [File(file), Capture, Square(dst), Promote, Piece(promotion)] => {
            promote(pawn_capture(file, dst), promotion)
        }
        _ => return None,
    };
    Some(descriptor)
}

fn piece_to(piece: PieceKind, dst: BoardLocation) -> MoveDescriptor {
    MoveDescriptor {
        piece: Some(piece),
        dst_file: Some(dst.file()),
        dst_rank: Some(dst.rank()),
        ..MoveDescriptor::default()
    }
}

/// Pawn pushes stay on their file.
fn pawn_to(dst: BoardLocation) -> MoveDescriptor {
    MoveDescriptor {
        src_file: Some(dst.file()),
        ..piece_to(PieceKind::Pawn, dst)
    }
}

fn pawn_capture(file: char, dst: BoardLocation) -> MoveDescriptor {
    MoveDescriptor {
        src_file: Some(file),
        ..piece_to(PieceKind::Pawn, dst)
    }
}

fn from_to(piece: Option<PieceKind>, src: BoardLocation, dst: BoardLocation) -> MoveDescriptor {
    MoveDescriptor {
        piece,
        src_file: Some(src.file()),
        src_rank: Some(src.rank()),
        dst_file: Some(dst.file()),
        dst_rank: Some(dst.rank()),
        promotion: None,
    }
}

fn promote(descriptor: MoveDescriptor, promotion: PieceKind) -> MoveDescriptor {
    MoveDescriptor {
        promotion: Some(promotion),
        ..descriptor
    }
}

/// King files only; the matcher pairs these with the castling candidates.
fn castle(dst_file: char) -> MoveDescriptor {
    MoveDescriptor {
        piece: Some(PieceKind::King),
        src_file: Some('e'),
        dst_file: Some(dst_file),
        ..MoveDescriptor::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> MoveDescriptor {
        parse_notation(text).unwrap_or_else(|err| panic!("{text} should parse: {err}"))
    }

    fn expected(
        piece: Option<PieceKind>,
        src: (Option<char>, Option<char>),
        dst: (Option<char>, Option<char>),
        promotion: Option<PieceKind>,
    ) -> MoveDescriptor {
        MoveDescriptor {
            piece,
            src_file: src.0,
            src_rank: src.1,
            dst_file: dst.0,
            dst_rank: dst.1,
            promotion,
        }
    }

    #[test]
    fn pawn_push_keeps_its_file() {
        assert_eq!(
            parse("e1"),
            expected(Some(PieceKind::Pawn), (Some('e'), None), (Some('e'), Some('1')), None)
        );
    }

    #[test]
    fn castles_describe_king_files() {
        assert_eq!(
            parse("o-o"),
            expected(Some(PieceKind::King), (Some('e'), None), (Some('g'), None), None)
        );
        assert_eq!(
            parse("o-o-o"),
            expected(Some(PieceKind::King), (Some('e'), None), (Some('c'), None), None)
        );
    }

    #[test]
    fn piece_moves_and_captures() {
        let bishop = expected(Some(PieceKind::Bishop), (None, None), (Some('f'), Some('5')), None);
        assert_eq!(parse("Bf5"), bishop);

        let rook = expected(Some(PieceKind::Rook), (None, None), (Some('f'), Some('8')), None);
        assert_eq!(parse("Rxf8"), rook);

        assert_eq!(
            parse("cxd7"),
            expected(Some(PieceKind::Pawn), (Some('c'), None), (Some('d'), Some('7')), None)
        );
    }

    #[test]
    fn long_coordinate_forms() {
        assert_eq!(
            parse("e2e4"),
            expected(None, (Some('e'), Some('2')), (Some('e'), Some('4')), None)
        );
        assert_eq!(
            parse("e7e8Q"),
            expected(None, (Some('e'), Some('7')), (Some('e'), Some('8')), Some(PieceKind::Queen))
        );
        assert_eq!(parse("e7e8=Q"), parse("e7e8Q"));
    }

    #[test]
    fn promotion_forms() {
        let queen = expected(
            Some(PieceKind::Pawn),
            (Some('e'), None),
            (Some('e'), Some('8')),
            Some(PieceKind::Queen),
        );
        assert_eq!(parse("e8Q"), queen);
        assert_eq!(parse("e8=Q"), queen);
        assert_eq!(
            parse("g8=R"),
            expected(Some(PieceKind::Pawn), (Some('g'), None), (Some('g'), Some('8')), Some(PieceKind::Rook))
        );
        assert_eq!(
            parse("exd8N"),
            expected(Some(PieceKind::Pawn), (Some('e'), None), (Some('d'), Some('8')), Some(PieceKind::Knight))
        );
        assert_eq!(parse("exd8=N"), parse("exd8N"));
    }

    #[test]
    fn disambiguated_forms() {
        assert_eq!(
            parse("Rdf8"),
            expected(Some(PieceKind::Rook), (Some('d'), None), (Some('f'), Some('8')), None)
        );
        assert_eq!(
            parse("R1a3"),
            expected(Some(PieceKind::Rook), (None, Some('1')), (Some('a'), Some('3')), None)
        );
        assert_eq!(
            parse("N3xc5"),
            expected(Some(PieceKind::Knight), (None, Some('3')), (Some('c'), Some('5')), None)
        );
        assert_eq!(
            parse("Ndxc5"),
            expected(Some(PieceKind::Knight), (Some('d'), None), (Some('c'), Some('5')), None)
        );

        let queen = expected(Some(PieceKind::Queen), (Some('h'), Some('4')), (Some('e'), Some('1')), None);
        assert_eq!(parse("Qh4xe1"), queen);
        assert_eq!(parse("Qh4e1"), queen);
    }

    #[test]
    fn rejects_unknown_characters_and_sequences() {
        assert!(matches!(parse_notation("Kz1"), Err(ChessErrors::UnrecognizedNotation('z'))));
        assert!(matches!(parse_notation("xx"), Err(ChessErrors::UnmatchedNotation(ref text)) if text == "xx"));
        assert!(matches!(parse_notation("Nf3 Nf6"), Err(ChessErrors::UnrecognizedNotation(' '))));
        assert!(matches!(parse_notation("   "), Err(ChessErrors::EmptyNotation)));
        assert!(parse_notation("e").expect_err("bare file").is_parse_error());
    }
}
