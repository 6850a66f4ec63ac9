//! Simplified chess movement rules.
//!
//! Piece geometry and blocking only. There is no check detection, castling,
//! en-passant or promotion: a king may walk into attack and may be captured,
//! and a pawn that reaches the last rank simply stays a pawn.

use crate::errors::MoveError;
use crate::game_state::board::Board;
use crate::game_state::board_types::*;
use crate::game_state::game_session::GameSession;
use crate::move_generation::rule_engine::RuleEngine;

pub struct ChessRules;

impl RuleEngine for ChessRules {
    type Piece = ChessPiece;

    const KIND: GameKind = GameKind::Chess;

    fn initial_board() -> Board<ChessPiece> {
        Board::chess_start()
    }

    fn validate_move(
        session: &GameSession<ChessPiece>,
        from: Position,
        to: Position,
    ) -> Result<(), MoveError> {
        let board = &session.board;
        let piece = board.get(from).ok_or(MoveError::NoPieceAtSource)?;

        if piece.color != session.turn {
            return Err(MoveError::WrongTurn);
        }
        if let Some(target) = board.get(to) {
            if target.color == piece.color {
                return Err(MoveError::FriendlyCapture);
            }
        }

        let (d_row, d_col) = from.delta_to(to);
        match piece.kind {
            PieceKind::Pawn => validate_pawn(board, piece.color, from, to),
            PieceKind::Knight => {
                let shape = (d_row.abs(), d_col.abs());
                if shape == (1, 2) || shape == (2, 1) {
                    Ok(())
                } else {
                    Err(MoveError::IllegalShape)
                }
            }
            PieceKind::Bishop => validate_slide(board, from, to, true, false),
            PieceKind::Rook => validate_slide(board, from, to, false, true),
            PieceKind::Queen => validate_slide(board, from, to, true, true),
            PieceKind::King => {
                if d_row.abs() <= 1 && d_col.abs() <= 1 {
                    Ok(())
                } else {
                    Err(MoveError::IllegalShape)
                }
            }
        }
    }

    fn apply_move(session: &mut GameSession<ChessPiece>, from: Position, to: Position) {
        let moved = session.board.take(from);
        session.board.set(to, moved);
        session.finish_turn(Move::new(from, to));
    }

    fn legal_moves(session: &GameSession<ChessPiece>) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        for from in session.board.squares_of(session.turn) {
            for to in Position::all() {
                if Self::validate_move(session, from, to).is_ok() {
                    out.push(Move::new(from, to));
                }
            }
        }
        out
    }
}

/// Row a pawn of `color` starts on and may double-step from.
#[inline]
const fn pawn_home_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

fn validate_pawn(
    board: &Board<ChessPiece>,
    color: Color,
    from: Position,
    to: Position,
) -> Result<(), MoveError> {
    let forward = color.forward();
    let (d_row, d_col) = from.delta_to(to);
    let target_empty = board.is_empty_at(to);

    if d_col == 0 {
        if d_row == forward && target_empty {
            return Ok(());
        }
        if d_row == 2 * forward && from.row() == pawn_home_row(color) {
            let skipped = from.offset(forward, 0).ok_or(MoveError::IllegalShape)?;
            if !board.is_empty_at(skipped) {
                return Err(MoveError::PathBlocked);
            }
            if target_empty {
                return Ok(());
            }
        }
        return Err(MoveError::IllegalShape);
    }

    // Diagonal steps are captures only; friendly targets were rejected earlier.
    if d_col.abs() == 1 && d_row == forward && !target_empty {
        return Ok(());
    }

    Err(MoveError::IllegalShape)
}

fn validate_slide(
    board: &Board<ChessPiece>,
    from: Position,
    to: Position,
    diagonal: bool,
    straight: bool,
) -> Result<(), MoveError> {
    let (d_row, d_col) = from.delta_to(to);
    let is_diagonal = d_row != 0 && d_row.abs() == d_col.abs();
    let is_straight = (d_row == 0) != (d_col == 0);

    if !((diagonal && is_diagonal) || (straight && is_straight)) {
        return Err(MoveError::IllegalShape);
    }

    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let mut current = from.offset(step_row, step_col);
    while let Some(square) = current {
        if square == to {
            return Ok(());
        }
        if !board.is_empty_at(square) {
            return Err(MoveError::PathBlocked);
        }
        current = square.offset(step_row, step_col);
    }

    Err(MoveError::IllegalShape)
}
