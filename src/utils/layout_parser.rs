//! Board-layout string parser.
//!
//! A layout lists the eight rows from row 0 downward, separated by `/`.
//! Digits stand for runs of empty squares and letters for pieces, using the
//! piece type's `BoardPiece::from_layout_char` encoding. Chess uses the FEN
//! piece letters; draughts uses `w`/`b` for men and `W`/`B` for kings.

use crate::game_state::board::Board;
use crate::game_state::board_types::*;

pub fn parse_layout<P: BoardPiece>(layout: &str) -> Result<Board<P>, String> {
    let rows: Vec<&str> = layout.trim().split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(format!(
            "Board layout must contain {BOARD_SIZE} rows, got {}",
            rows.len()
        ));
    }

    let mut board = Board::empty();

    for (row_idx, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=BOARD_SIZE).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += step;
            } else {
                let piece = P::from_layout_char(ch)
                    .ok_or_else(|| format!("Invalid piece character '{ch}'"))?;
                let pos = Position::new(row_idx as u8, col as u8)
                    .ok_or_else(|| format!("Row {row_idx} overflows the board"))?;
                board.set(pos, Some(piece));
                col += 1;
            }

            if col > BOARD_SIZE {
                return Err(format!("Row {row_idx} overflows the board"));
            }
        }

        if col != BOARD_SIZE {
            return Err(format!("Row {row_idx} describes {col} squares, expected {BOARD_SIZE}"));
        }
    }

    Ok(board)
}
