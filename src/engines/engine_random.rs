//! Naive random-move engine.
//!
//! Selects uniformly from the rule engine's legal moves. It is the opponent
//! for solo games and doubles as a fuzzer for the rule engines in tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::game_state::board_types::Move;
use crate::game_state::game_session::GameSession;
use crate::move_generation::rule_engine::RuleEngine;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible engine, used when the host configures a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move<R: RuleEngine>(&mut self, session: &GameSession<R::Piece>) -> Option<Move> {
        let legal_moves = R::legal_moves(session);
        legal_moves.as_slice().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board_types::*;
    use crate::game_state::game_session::GameSession;
    use crate::move_generation::chess_rules::ChessRules;
    use crate::move_generation::draughts_rules::DraughtsRules;
    use crate::move_generation::rule_engine::RuleEngine;
    use crate::utils::layout_parser::parse_layout;
    use proptest::prelude::*;

    /// Play up to `plies` random moves, checking each choice against validation.
    fn random_playout<R: RuleEngine>(seed: u64, plies: usize) -> GameSession<R::Piece> {
        let mut engine = RandomEngine::seeded(seed);
        let mut session = R::new_session(GameMode::HumanVsHuman);

        for _ in 0..plies {
            let Some(mv) = engine.choose_move::<R>(&session) else {
                break;
            };
            assert_eq!(
                R::validate_move(&session, mv.from, mv.to),
                Ok(()),
                "engine chose a rejected move {mv:?}"
            );
            R::apply_move(&mut session, mv.from, mv.to);
        }

        session
    }

    #[test]
    fn same_seed_plays_the_same_game() {
        let first = random_playout::<ChessRules>(7, 40);
        let second = random_playout::<ChessRules>(7, 40);
        assert_eq!(first.board, second.board);
        assert_eq!(first.moves_played, second.moves_played);
    }

    #[test]
    fn draughts_engine_prefers_the_jump() {
        let board = parse_layout("8/8/8/4b3/3w4/8/8/w7").expect("layout should parse");
        let session = GameSession::new(GameKind::Draughts, board, GameMode::HumanVsHuman);
        let mut engine = RandomEngine::seeded(3);
        for _ in 0..10 {
            let mv = engine
                .choose_move::<DraughtsRules>(&session)
                .expect("a jump is available");
            assert_eq!(mv.to, Position::new(2, 5).expect("C6"));
        }
    }

    #[test]
    fn draughts_turn_finishes_the_whole_chain() {
        let board = parse_layout("8/8/8/4b3/8/2b5/1w6/8").expect("layout should parse");
        let mut session = GameSession::new(GameKind::Draughts, board, GameMode::HumanVsHuman);
        let mut engine = RandomEngine::seeded(11);

        let played = engine.play_turn::<DraughtsRules>(&mut session);
        assert_eq!(played.len(), 2);
        assert_eq!(session.turn, Color::Black);
        assert!(!session.must_continue_jump);
        assert_eq!(session.board.count(Color::Black), 0);
    }

    #[test]
    fn stuck_side_reports_no_move() {
        let board = parse_layout("8/8/8/8/8/8/8/w7").expect("layout should parse");
        let mut session = GameSession::new(GameKind::Draughts, board, GameMode::HumanVsHuman);
        session.turn = Color::Black;
        let mut engine = RandomEngine::seeded(1);

        assert!(engine.choose_move::<DraughtsRules>(&session).is_none());
        let before = session.clone();
        assert!(engine.play_turn::<DraughtsRules>(&mut session).is_empty());
        assert_eq!(session, before);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn chess_engine_only_picks_valid_moves(seed in any::<u64>()) {
            let session = random_playout::<ChessRules>(seed, 60);
            prop_assert!(session.moves_played <= 60);
            prop_assert_eq!(session.turn == Color::White, session.moves_played % 2 == 0);
            prop_assert!(session.board.count(Color::White) <= 16);
        }

        #[test]
        fn draughts_engine_only_picks_valid_moves(seed in any::<u64>()) {
            let session = random_playout::<DraughtsRules>(seed, 120);
            prop_assert!(session.board.count(Color::White) <= 12);
            prop_assert!(session.board.count(Color::Black) <= 12);
            prop_assert!(!session.must_continue_jump || session.selected.is_some());
        }
    }
}
