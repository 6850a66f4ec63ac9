//! Draughts movement rules.
//!
//! Men step and jump diagonally forward only (white toward row 0, black
//! toward row 7); kings use all four diagonals. A capturing jump is
//! mandatory whenever one exists anywhere for the side to move, and a piece
//! that lands with another jump available keeps the turn until its chain is
//! exhausted. Captures are not maximised: any available jump may be played.

use crate::errors::MoveError;
use crate::game_state::board::Board;
use crate::game_state::board_types::*;
use crate::game_state::game_session::GameSession;
use crate::move_generation::rule_engine::RuleEngine;

const WHITE_FORWARD: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const BLACK_FORWARD: [(i8, i8); 2] = [(1, -1), (1, 1)];
const ALL_DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub struct DraughtsRules;

/// Diagonal directions `piece` may step and jump in.
#[inline]
pub fn move_directions(piece: DraughtsPiece) -> &'static [(i8, i8)] {
    match (piece.crowned, piece.color) {
        (true, _) => &ALL_DIAGONALS,
        (false, Color::White) => &WHITE_FORWARD,
        (false, Color::Black) => &BLACK_FORWARD,
    }
}

/// Row on which a man of `color` is crowned.
#[inline]
pub const fn crowning_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => (BOARD_SIZE - 1) as u8,
    }
}

/// Landing squares of every jump available to the piece on `pos`.
pub fn find_jumps(board: &Board<DraughtsPiece>, pos: Position) -> Vec<Position> {
    let Some(piece) = board.get(pos) else {
        return Vec::new();
    };

    move_directions(piece)
        .iter()
        .filter_map(|&(d_row, d_col)| {
            let over = pos.offset(d_row, d_col)?;
            let landing = pos.offset(2 * d_row, 2 * d_col)?;
            let victim = board.get(over)?;
            (victim.color != piece.color && board.is_empty_at(landing)).then_some(landing)
        })
        .collect()
}

/// Whether any piece of `color` has a jump somewhere on the board.
pub fn side_has_jump(board: &Board<DraughtsPiece>, color: Color) -> bool {
    board
        .squares_of(color)
        .into_iter()
        .any(|pos| !find_jumps(board, pos).is_empty())
}

impl RuleEngine for DraughtsRules {
    type Piece = DraughtsPiece;

    const KIND: GameKind = GameKind::Draughts;

    fn initial_board() -> Board<DraughtsPiece> {
        Board::draughts_start()
    }

    fn validate_move(
        session: &GameSession<DraughtsPiece>,
        from: Position,
        to: Position,
    ) -> Result<(), MoveError> {
        let board = &session.board;
        let piece = board.get(from).ok_or(MoveError::NoPieceAtSource)?;

        if piece.color != session.turn {
            return Err(MoveError::WrongTurn);
        }
        if !board.is_empty_at(to) {
            return Err(MoveError::DestinationOccupied);
        }

        // Mid-chain only the jumping piece may move, and only by jumping again.
        if session.must_continue_jump && session.selected != Some(from) {
            return Err(MoveError::MustJump);
        }
        if session.must_continue_jump || side_has_jump(board, session.turn) {
            return if find_jumps(board, from).contains(&to) {
                Ok(())
            } else {
                Err(MoveError::MustJump)
            };
        }

        if move_directions(piece).contains(&from.delta_to(to)) {
            Ok(())
        } else {
            Err(MoveError::IllegalShape)
        }
    }

    fn apply_move(session: &mut GameSession<DraughtsPiece>, from: Position, to: Position) {
        let board = &mut session.board;
        let Some(mut piece) = board.take(from) else {
            return;
        };

        let (d_row, d_col) = from.delta_to(to);
        let is_jump = d_row.abs() == 2;
        if is_jump {
            if let Some(jumped) = from.offset(d_row / 2, d_col / 2) {
                board.take(jumped);
            }
        }

        if !piece.crowned && to.row() == crowning_row(piece.color) {
            piece.crowned = true;
        }
        board.set(to, Some(piece));

        let mv = Move::new(from, to);
        if is_jump && !find_jumps(board, to).is_empty() {
            session.continue_chain(mv);
        } else {
            session.finish_turn(mv);
        }
    }

    /// Jumps across all pieces take precedence over plain steps.
    fn legal_moves(session: &GameSession<DraughtsPiece>) -> Vec<Move> {
        let board = &session.board;
        let movers: Vec<Position> = if session.must_continue_jump {
            session.selected.into_iter().collect()
        } else {
            board.squares_of(session.turn)
        };

        let jumps: Vec<Move> = movers
            .iter()
            .flat_map(|&from| {
                find_jumps(board, from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect();
        if !jumps.is_empty() || session.must_continue_jump {
            return jumps;
        }

        let mut steps = Vec::new();
        for from in movers {
            let Some(piece) = board.get(from) else {
                continue;
            };
            for &(d_row, d_col) in move_directions(piece) {
                if let Some(to) = from.offset(d_row, d_col) {
                    if board.is_empty_at(to) {
                        steps.push(Move::new(from, to));
                    }
                }
            }
        }
        steps
    }
}
