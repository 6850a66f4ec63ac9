//! Mutable state of one game in one channel.
//!
//! A `GameSession` owns its board exclusively. Rule engines validate against
//! it and then mutate it through the bookkeeping helpers below, which keep
//! the turn, selection and status line consistent.

use chrono::{DateTime, Utc};

use crate::errors::MoveError;
use crate::game_state::board::Board;
use crate::game_state::board_types::*;
use crate::utils::notation::format_position;

#[derive(Debug, Clone, PartialEq)]
pub struct GameSession<P: BoardPiece> {
    pub kind: GameKind,
    pub board: Board<P>,
    pub turn: Color,
    pub selected: Option<Position>,
    /// Draughts only: the selected piece must keep jumping before the turn passes.
    pub must_continue_jump: bool,
    pub mode: GameMode,
    pub status_text: String,
    pub started_at: DateTime<Utc>,
    pub moves_played: u32,
    pub last_move: Option<Move>,
}

impl<P: BoardPiece> GameSession<P> {
    pub fn new(kind: GameKind, board: Board<P>, mode: GameMode) -> Self {
        let mut session = Self {
            kind,
            board,
            turn: Color::White,
            selected: None,
            must_continue_jump: false,
            mode,
            status_text: String::new(),
            started_at: Utc::now(),
            moves_played: 0,
            last_move: None,
        };
        session.refresh_status();
        session
    }

    /// Mark `pos` as the piece the side to move intends to play.
    ///
    /// Mid-chain only the jumping piece may be selected.
    pub fn select(&mut self, pos: Position) -> Result<(), MoveError> {
        let piece = self.board.get(pos).ok_or(MoveError::NoPieceAtSource)?;
        if piece.color() != self.turn {
            return Err(MoveError::WrongTurn);
        }
        if self.must_continue_jump && self.selected != Some(pos) {
            return Err(MoveError::MustJump);
        }
        self.selected = Some(pos);
        self.refresh_status();
        Ok(())
    }

    /// Whether the computer should answer for the side now to move.
    #[inline]
    pub fn ai_to_move(&self) -> bool {
        self.mode == GameMode::HumanVsAi && self.turn == GameMode::AI_COLOR
    }

    /// Record a committed move and hand the turn to the other side.
    pub(crate) fn finish_turn(&mut self, mv: Move) {
        self.record(mv);
        self.turn = self.turn.opposite();
        self.selected = None;
        self.must_continue_jump = false;
        self.refresh_status();
    }

    /// Record a committed jump that leaves the same piece jumping again.
    pub(crate) fn continue_chain(&mut self, mv: Move) {
        self.record(mv);
        self.selected = Some(mv.to);
        self.must_continue_jump = true;
        self.refresh_status();
    }

    pub(crate) fn note_no_moves(&mut self) {
        self.status_text = format!("{} has no legal move.", self.turn);
    }

    fn record(&mut self, mv: Move) {
        self.moves_played = self.moves_played.saturating_add(1);
        self.last_move = Some(mv);
    }

    pub fn refresh_status(&mut self) {
        let mut status = String::new();
        if let Some(mv) = self.last_move {
            status.push_str(&format!(
                "Last move {}-{}. ",
                format_position(self.kind, mv.from),
                format_position(self.kind, mv.to)
            ));
        }
        status.push_str(&format!("{} to move", self.turn));
        match self.selected {
            Some(pos) if self.must_continue_jump => status.push_str(&format!(
                ", continue jumping from {}",
                format_position(self.kind, pos)
            )),
            Some(pos) => status.push_str(&format!(
                ", {} selected",
                format_position(self.kind, pos)
            )),
            None => {}
        }
        status.push('.');
        self.status_text = status;
    }
}
