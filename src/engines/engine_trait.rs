//! Engine abstraction used by the command front-end.
//!
//! An engine picks a move for whichever side is to play in a session. The
//! provided `play_turn` applies its choices until the turn actually passes,
//! which matters for draughts where one turn may be a chain of jumps.

use tracing::{debug, warn};

use crate::game_state::board_types::Move;
use crate::game_state::game_session::GameSession;
use crate::move_generation::rule_engine::RuleEngine;

pub trait Engine {
    fn name(&self) -> &str;

    /// Pick a legal move for the side to move, or `None` when it has none.
    fn choose_move<R: RuleEngine>(&mut self, session: &GameSession<R::Piece>) -> Option<Move>;

    /// Play a whole turn for the side to move and return the moves made.
    ///
    /// An empty result means the side had no legal move and the session was
    /// left untouched.
    fn play_turn<R: RuleEngine>(&mut self, session: &mut GameSession<R::Piece>) -> Vec<Move> {
        let side = session.turn;
        let mut played = Vec::new();

        while session.turn == side {
            let Some(mv) = self.choose_move::<R>(session) else {
                break;
            };
            R::apply_move(session, mv.from, mv.to);
            played.push(mv);
        }

        if played.is_empty() {
            warn!(engine = self.name(), game = %R::KIND, %side, "no legal move available");
        } else {
            debug!(engine = self.name(), game = %R::KIND, %side, moves = played.len(), "engine turn played");
        }

        played
    }
}
