//! Left-to-right tokenizer for typed move commands.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::moves::board_location::BoardLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotationToken {
    Piece(PieceKind),
    Capture,
    Square(BoardLocation),
    Promote,
    ShortCastle,
    LongCastle,
    Rank(char),
    File(char),
}

/// Longest literal first so `o-o-o` is never read as `o-o` plus garbage.
static CASTLE_LITERALS: [(&str, NotationToken); 6] = [
    ("o-o-o", NotationToken::LongCastle),
    ("O-O-O", NotationToken::LongCastle),
    ("0-0-0", NotationToken::LongCastle),
    ("o-o", NotationToken::ShortCastle),
    ("O-O", NotationToken::ShortCastle),
    ("0-0", NotationToken::ShortCastle),
];

/// Splits `text` into notation tokens. Check and mate markers (`+`, `#`) are
/// accepted only at the end and dropped.
pub fn tokenize_notation(text: &str) -> ChessResult<Vec<NotationToken>> {
    let text = text.trim().trim_end_matches(&['+', '#'][..]);
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::with_capacity(4);
    let mut pos = 0;

    while pos < chars.len() {
        if let Some((literal, token)) = CASTLE_LITERALS
            .iter()
            .find(|(literal, _)| text[byte_offset(&chars, pos)..].starts_with(*literal))
        {
            tokens.push(*token);
            pos += literal.len();
            continue;
        }

        let ch = chars[pos];
        let next = chars.get(pos + 1).copied();
        let token = match ch {
            'x' => NotationToken::Capture,
            '=' => NotationToken::Promote,
            '1'..='8' => NotationToken::Rank(ch),
            'a'..='h' => match next.and_then(|rank| BoardLocation::new(ch, rank)) {
                Some(square) => {
                    pos += 1;
                    NotationToken::Square(square)
                }
                None => NotationToken::File(ch),
            },
            _ => match PieceKind::from_letter(ch) {
                Some(kind) => NotationToken::Piece(kind),
                None => return Err(ChessErrors::UnrecognizedNotation(ch)),
            },
        };
        tokens.push(token);
        pos += 1;
    }

    Ok(tokens)
}

fn byte_offset(chars: &[char], pos: usize) -> usize {
    chars[..pos].iter().map(|ch| ch.len_utf8()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use NotationToken::*;

    fn square(text: &str) -> NotationToken {
        Square(BoardLocation::parse(text).expect("test square should parse"))
    }

    #[test]
    fn tokenizes_piece_capture_and_square() {
        let tokens = tokenize_notation("Qh4xe1").expect("notation should tokenize");
        assert_eq!(
            tokens,
            vec![Piece(PieceKind::Queen), square("h4"), Capture, square("e1")]
        );
    }

    #[test]
    fn tokenizes_bare_files_and_ranks() {
        assert_eq!(
            tokenize_notation("Rdf8").expect("notation should tokenize"),
            vec![Piece(PieceKind::Rook), File('d'), square("f8")]
        );
        assert_eq!(
            tokenize_notation("R1a3").expect("notation should tokenize"),
            vec![Piece(PieceKind::Rook), Rank('1'), square("a3")]
        );
    }

    #[test]
    fn castle_literals_and_annotations() {
        assert_eq!(tokenize_notation("O-O-O+").expect("castle"), vec![LongCastle]);
        assert_eq!(tokenize_notation("0-0").expect("castle"), vec![ShortCastle]);
        assert_eq!(tokenize_notation("e8=Q#").expect("promotion"), vec![
            square("e8"),
            Promote,
            Piece(PieceKind::Queen),
        ]);
    }

    #[test]
    fn unknown_character_fails_without_partial_result() {
        let err = tokenize_notation("Nf3z").expect_err("z is not notation");
        assert!(matches!(err, ChessErrors::UnrecognizedNotation('z')));
        assert!(matches!(
            tokenize_notation("e+4"),
            Err(ChessErrors::UnrecognizedNotation('+'))
        ));
    }
}
