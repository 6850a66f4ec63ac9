//! Text board renderer.
//!
//! Produces the fixed-width grid returned to players: one space between
//! cells and the same axis labels repeated on both edges, so the labels
//! always match the notation the codec accepts for that game.

use crate::game_state::board::Board;
use crate::game_state::board_types::*;

const EMPTY_CELL: char = '·';
const CHESS_FILES: &str = "  a b c d e f g h";
const DRAUGHTS_COLUMNS: &str = "  1 2 3 4 5 6 7 8";

/// Render the board as a Unicode string.
///
/// Row 0 is printed first. Chess rows are labelled with ranks 8 down to 1,
/// draughts rows with the letters A to H.
pub fn render_board<P: BoardPiece>(board: &Board<P>, kind: GameKind) -> String {
    let header = match kind {
        GameKind::Chess => CHESS_FILES,
        GameKind::Draughts => DRAUGHTS_COLUMNS,
    };

    let mut out = String::new();
    out.push_str(header);
    out.push('\n');

    for row in 0..BOARD_SIZE as u8 {
        let label = row_label(kind, row);
        out.push(label);
        out.push(' ');

        for col in 0..BOARD_SIZE as u8 {
            let cell = Position::new(row, col)
                .and_then(|pos| board.get(pos))
                .map_or(EMPTY_CELL, |piece| piece.glyph());
            out.push(cell);

            if (col as usize) < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str(header);

    out
}

fn row_label(kind: GameKind, row: u8) -> char {
    match kind {
        GameKind::Chess => char::from(b'8' - row),
        GameKind::Draughts => char::from(b'A' + row),
    }
}
