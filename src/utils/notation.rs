//! Square notation for both games.
//!
//! Chess uses file + rank (`e4`), rank 8 being row 0. Draughts uses a row
//! letter + column digit (`F1`), row letter `A` being row 0 and column digit
//! `1` being column 0. Letters are accepted in either case.

use crate::errors::EngineError;
use crate::game_state::board_types::{GameKind, Position};

/// Convert chess notation (for example: "e4") to a position.
pub fn parse_chess_position(text: &str) -> Option<Position> {
    let [file, rank] = two_bytes(text)?;
    let file = file.to_ascii_lowercase();

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }

    Position::new(b'8' - rank, file - b'a')
}

/// Convert draughts notation (for example: "F1") to a position.
pub fn parse_draughts_position(text: &str) -> Option<Position> {
    let [row, col] = two_bytes(text)?;
    let row = row.to_ascii_uppercase();

    if !(b'A'..=b'H').contains(&row) || !(b'1'..=b'8').contains(&col) {
        return None;
    }

    Position::new(row - b'A', col - b'1')
}

/// Parse notation for `kind`, rejecting anything that is not a square.
pub fn parse_position(kind: GameKind, text: &str) -> Result<Position, EngineError> {
    let parsed = match kind {
        GameKind::Chess => parse_chess_position(text),
        GameKind::Draughts => parse_draughts_position(text),
    };
    parsed.ok_or_else(|| EngineError::InvalidNotation(text.to_owned()))
}

pub fn chess_notation(pos: Position) -> String {
    let file = char::from(b'a' + pos.col());
    let rank = char::from(b'8' - pos.row());
    format!("{file}{rank}")
}

pub fn draughts_notation(pos: Position) -> String {
    let row = char::from(b'A' + pos.row());
    let col = char::from(b'1' + pos.col());
    format!("{row}{col}")
}

pub fn format_position(kind: GameKind, pos: Position) -> String {
    match kind {
        GameKind::Chess => chess_notation(pos),
        GameKind::Draughts => draughts_notation(pos),
    }
}

#[inline]
fn two_bytes(text: &str) -> Option<[u8; 2]> {
    match text.as_bytes() {
        &[first, second] => Some([first, second]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn chess_corners_map_to_grid_corners() {
        assert_eq!(parse_chess_position("a8"), Position::new(0, 0));
        assert_eq!(parse_chess_position("h1"), Position::new(7, 7));
        assert_eq!(parse_chess_position("E2"), Position::new(6, 4));
        assert_eq!(chess_notation(Position::new(4, 4).expect("e4")), "e4");
    }

    #[test]
    fn draughts_rows_are_letters() {
        assert_eq!(parse_draughts_position("A1"), Position::new(0, 0));
        assert_eq!(parse_draughts_position("f1"), Position::new(5, 0));
        assert_eq!(parse_draughts_position("H8"), Position::new(7, 7));
        assert_eq!(draughts_notation(Position::new(4, 1).expect("E2")), "E2");
    }

    #[test]
    fn notation_round_trips_on_every_square() {
        for pos in Position::all() {
            assert_eq!(parse_chess_position(&chess_notation(pos)), Some(pos));
            assert_eq!(parse_draughts_position(&draughts_notation(pos)), Some(pos));
        }
    }

    #[test]
    fn malformed_notation_is_rejected() {
        for text in ["", "e", "e44", "i1", "a0", "a9", "e 4", "4e", "é4"] {
            assert_eq!(parse_chess_position(text), None, "chess {text:?}");
        }
        for text in ["", "A", "A10", "I1", "A0", "A9", "1A"] {
            assert_eq!(parse_draughts_position(text), None, "draughts {text:?}");
        }
        assert_eq!(
            parse_position(GameKind::Chess, "z9"),
            Err(EngineError::InvalidNotation("z9".to_owned()))
        );
    }

    proptest! {
        #[test]
        fn chess_parse_accepts_exactly_the_board(a in any::<char>(), b in any::<char>()) {
            let text: String = [a, b].iter().collect();
            let valid = a.is_ascii()
                && ('a'..='h').contains(&a.to_ascii_lowercase())
                && ('1'..='8').contains(&b);
            prop_assert_eq!(parse_chess_position(&text).is_some(), valid);
        }

        #[test]
        fn draughts_parse_accepts_exactly_the_board(a in any::<char>(), b in any::<char>()) {
            let text: String = [a, b].iter().collect();
            let valid = a.is_ascii()
                && ('A'..='H').contains(&a.to_ascii_uppercase())
                && ('1'..='8').contains(&b);
            prop_assert_eq!(parse_draughts_position(&text).is_some(), valid);
        }
    }
}
