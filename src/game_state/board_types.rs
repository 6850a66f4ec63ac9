//! Shared value types for both board games.
//!
//! Colors, squares, piece encodings and the small enums that describe which
//! game a session plays and who is sitting on the other side of the board.

use std::fmt;

/// Width and height of every board handled by the engine.
pub const BOARD_SIZE: usize = 8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step. White plays up the grid toward row 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A square on the 8x8 grid, `row` 0 being the top row of the rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    #[inline]
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square `d_row`/`d_col` away, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Signed (row, col) distance from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Position) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    /// All 64 squares, row-major from the top-left corner.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position { row, col }))
    }
}

/// A piece relocation from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// Chess piece kind (color is carried separately by `ChessPiece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessPiece {
    pub color: Color,
    pub kind: PieceKind,
}

impl ChessPiece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// A draughts man, or a king once `crowned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DraughtsPiece {
    pub color: Color,
    pub crowned: bool,
}

impl DraughtsPiece {
    #[inline]
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            crowned: false,
        }
    }

    #[inline]
    pub const fn king(color: Color) -> Self {
        Self {
            color,
            crowned: true,
        }
    }
}

/// Behaviour every piece type stored on a `Board` must provide.
pub trait BoardPiece: Copy + PartialEq + fmt::Debug + Send + 'static {
    fn color(&self) -> Color;

    /// Single glyph used by the text renderer.
    fn glyph(&self) -> char;

    /// Decode one character of a board layout string.
    fn from_layout_char(ch: char) -> Option<Self>;
}

impl BoardPiece for ChessPiece {
    #[inline]
    fn color(&self) -> Color {
        self.color
    }

    fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }

    fn from_layout_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(ChessPiece::new(color, kind))
    }
}

impl BoardPiece for DraughtsPiece {
    #[inline]
    fn color(&self) -> Color {
        self.color
    }

    fn glyph(&self) -> char {
        match (self.color, self.crowned) {
            (Color::White, false) => '⛀',
            (Color::White, true) => '⛁',
            (Color::Black, false) => '⛂',
            (Color::Black, true) => '⛃',
        }
    }

    /// `w`/`b` for men, `W`/`B` for kings.
    fn from_layout_char(ch: char) -> Option<Self> {
        match ch {
            'w' => Some(DraughtsPiece::man(Color::White)),
            'W' => Some(DraughtsPiece::king(Color::White)),
            'b' => Some(DraughtsPiece::man(Color::Black)),
            'B' => Some(DraughtsPiece::king(Color::Black)),
            _ => None,
        }
    }
}

/// Which game a session plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Chess,
    Draughts,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameKind::Chess => write!(f, "chess"),
            GameKind::Draughts => write!(f, "draughts"),
        }
    }
}

/// Who plays the second side of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    HumanVsAi,
}

impl GameMode {
    /// Side the computer plays in `HumanVsAi` mode.
    pub const AI_COLOR: Color = Color::Black;
}
