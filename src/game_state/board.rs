//! 8x8 grid model shared by both games.
//!
//! A `Board` is a plain array of optional pieces. Every session builds its
//! own board from the starting layouts below, so no two sessions ever share
//! a grid.

use crate::game_state::board_types::*;

/// Chess back rank from the a-file to the h-file.
const CHESS_BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Rows holding the black and white draughts men at the start.
const DRAUGHTS_BLACK_ROWS: std::ops::Range<u8> = 0..3;
const DRAUGHTS_WHITE_ROWS: std::ops::Range<u8> = 5..8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<P: BoardPiece> {
    cells: [[Option<P>; BOARD_SIZE]; BOARD_SIZE],
}

impl<P: BoardPiece> Default for Board<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P: BoardPiece> Board<P> {
    #[inline]
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<P> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<P>) {
        self.cells[pos.row() as usize][pos.col() as usize] = piece;
    }

    /// Remove and return whatever stands on `pos`, leaving it empty.
    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<P> {
        self.cells[pos.row() as usize][pos.col() as usize].take()
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, P)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    pub fn squares_of(&self, color: Color) -> Vec<Position> {
        self.pieces()
            .filter(|(_, piece)| piece.color() == color)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, piece)| piece.color() == color).count()
    }
}

impl Board<ChessPiece> {
    /// Standard chess start: black on rows 0-1 (ranks 8-7), white on rows 6-7.
    pub fn chess_start() -> Self {
        let mut board = Self::empty();
        for (col, kind) in CHESS_BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.put(0, col, ChessPiece::new(Color::Black, *kind));
            board.put(1, col, ChessPiece::new(Color::Black, PieceKind::Pawn));
            board.put(6, col, ChessPiece::new(Color::White, PieceKind::Pawn));
            board.put(7, col, ChessPiece::new(Color::White, *kind));
        }
        board
    }
}

impl Board<DraughtsPiece> {
    /// Twelve men a side on the dark squares, where `row + col` is odd.
    pub fn draughts_start() -> Self {
        let mut board = Self::empty();
        for pos in Position::all().filter(|pos| is_dark_square(*pos)) {
            if DRAUGHTS_BLACK_ROWS.contains(&pos.row()) {
                board.set(pos, Some(DraughtsPiece::man(Color::Black)));
            } else if DRAUGHTS_WHITE_ROWS.contains(&pos.row()) {
                board.set(pos, Some(DraughtsPiece::man(Color::White)));
            }
        }
        board
    }
}

impl<P: BoardPiece> Board<P> {
    fn put(&mut self, row: u8, col: u8, piece: P) {
        self.cells[row as usize][col as usize] = Some(piece);
    }
}

#[inline]
pub fn is_dark_square(pos: Position) -> bool {
    (pos.row() + pos.col()) % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn chess_start_has_thirty_two_pieces() {
        let board = Board::chess_start();
        assert_eq!(board.count(Color::White), 16);
        assert_eq!(board.count(Color::Black), 16);
        assert_eq!(
            board.get(at(7, 4)),
            Some(ChessPiece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.get(at(0, 3)),
            Some(ChessPiece::new(Color::Black, PieceKind::Queen))
        );
        assert!(board.is_empty_at(at(4, 4)));
    }

    #[test]
    fn draughts_start_uses_dark_squares_only() {
        let board = Board::draughts_start();
        assert_eq!(board.count(Color::White), 12);
        assert_eq!(board.count(Color::Black), 12);
        assert!(board.pieces().all(|(pos, _)| is_dark_square(pos)));
        assert_eq!(board.get(at(5, 0)), Some(DraughtsPiece::man(Color::White)));
        assert_eq!(board.get(at(0, 1)), Some(DraughtsPiece::man(Color::Black)));
        assert!(board.is_empty_at(at(3, 0)));
    }

    #[test]
    fn take_leaves_square_empty() {
        let mut board = Board::chess_start();
        let e2 = at(6, 4);
        let pawn = board.take(e2);
        assert_eq!(pawn, Some(ChessPiece::new(Color::White, PieceKind::Pawn)));
        assert!(board.is_empty_at(e2));
        assert_eq!(board.pieces().count(), 31);
    }

    #[test]
    fn fresh_boards_do_not_alias() {
        let mut first = Board::draughts_start();
        let second = Board::draughts_start();
        first.take(at(5, 0));
        assert_ne!(first, second);
        assert_eq!(second.get(at(5, 0)), Some(DraughtsPiece::man(Color::White)));
    }
}
