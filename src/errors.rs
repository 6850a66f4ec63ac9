//! Error types returned by the board engine.
//!
//! Rule violations are expected outcomes, not faults: every variant here is
//! recoverable and meant to be shown to the player so they can try again.
//!
//! - `MoveError` is produced by the rule engines when a move or selection
//!   breaks the movement rules of the game being played.
//! - `EngineError` wraps `MoveError` and adds the failures that happen before
//!   or around rule evaluation (bad notation, missing session, unknown verb).

use thiserror::Error;

use crate::game_state::board_types::{Color, GameKind};

/// Reason a move was rejected by a rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("there is no piece on that square")]
    NoPieceAtSource,

    #[error("that piece belongs to the side not on move")]
    WrongTurn,

    #[error("the destination holds a piece of the same color")]
    FriendlyCapture,

    /// Draughts counterpart of `FriendlyCapture`; pieces never land on occupied squares.
    #[error("the destination square is occupied")]
    DestinationOccupied,

    #[error("that piece cannot move that way")]
    IllegalShape,

    #[error("another piece stands in the way")]
    PathBlocked,

    #[error("a capturing jump is available and must be played")]
    MustJump,
}

/// Failure of an engine command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Square notation could not be decoded. Raised before any rule check.
    #[error("invalid square notation: {0:?}")]
    InvalidNotation(String),

    #[error("no active {kind} game in this channel")]
    NoActiveSession { kind: GameKind },

    #[error("no piece is selected; give both squares or select a piece first")]
    NoSelection,

    #[error("{0} has no legal move available")]
    NoMoveAvailable(Color),

    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    #[error(transparent)]
    Move(#[from] MoveError),
}
