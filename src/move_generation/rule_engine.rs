//! Rule-engine abstraction shared by chess and draughts.
//!
//! Validation and mutation are separate on purpose: `validate_move` never
//! touches the session and `apply_move` never re-checks. Callers validate
//! first and only apply a move that passed.

use crate::errors::MoveError;
use crate::game_state::board::Board;
use crate::game_state::board_types::*;
use crate::game_state::game_session::GameSession;

pub trait RuleEngine {
    type Piece: BoardPiece;

    const KIND: GameKind;

    fn initial_board() -> Board<Self::Piece>;

    fn validate_move(
        session: &GameSession<Self::Piece>,
        from: Position,
        to: Position,
    ) -> Result<(), MoveError>;

    /// Commit a previously validated move.
    fn apply_move(session: &mut GameSession<Self::Piece>, from: Position, to: Position);

    /// Every move the side to move may legally play right now.
    fn legal_moves(session: &GameSession<Self::Piece>) -> Vec<Move>;

    fn new_session(mode: GameMode) -> GameSession<Self::Piece> {
        GameSession::new(Self::KIND, Self::initial_board(), mode)
    }
}
