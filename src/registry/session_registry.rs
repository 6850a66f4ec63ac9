//! Per-channel session registry.
//!
//! Each channel key owns at most one chess and one draughts session plus the
//! random engine that answers in solo games. The channel map sits behind a
//! read-write lock and every channel behind its own mutex, so a command on
//! one channel runs as a single transaction while other channels proceed in
//! parallel.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::engines::engine_random::RandomEngine;
use crate::errors::EngineError;
use crate::game_state::board_types::*;
use crate::game_state::game_session::GameSession;
use crate::move_generation::chess_rules::ChessRules;
use crate::move_generation::draughts_rules::DraughtsRules;
use crate::move_generation::rule_engine::RuleEngine;

#[derive(Debug, Clone, Default)]
pub struct ChannelSessions {
    pub chess: Option<GameSession<ChessPiece>>,
    pub draughts: Option<GameSession<DraughtsPiece>>,
}

/// Everything a channel owns.
pub struct ChannelGames {
    pub sessions: ChannelSessions,
    pub engine: RandomEngine,
}

/// Maps a rule engine to the session slot it occupies in a channel.
pub trait SessionSlot: RuleEngine {
    fn slot(sessions: &mut ChannelSessions) -> &mut Option<GameSession<Self::Piece>>;
}

impl SessionSlot for ChessRules {
    fn slot(sessions: &mut ChannelSessions) -> &mut Option<GameSession<ChessPiece>> {
        &mut sessions.chess
    }
}

impl SessionSlot for DraughtsRules {
    fn slot(sessions: &mut ChannelSessions) -> &mut Option<GameSession<DraughtsPiece>> {
        &mut sessions.draughts
    }
}

type ChannelHandle = Arc<Mutex<ChannelGames>>;

pub struct SessionRegistry {
    config: EngineConfig,
    channels: RwLock<HashMap<String, ChannelHandle>>,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl SessionRegistry {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            channels: RwLock::new(HashMap::new()),
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Snapshot of the channel's session of game `R`, if one was started.
    pub fn get<R: SessionSlot>(&self, channel: &str) -> Option<GameSession<R::Piece>> {
        let handle = self.handle(channel)?;
        let mut games = handle.lock();
        R::slot(&mut games.sessions).clone()
    }

    /// Start a fresh game, replacing any session of the same kind.
    pub fn start<R: SessionSlot>(&self, channel: &str, mode: GameMode) -> GameSession<R::Piece> {
        let handle = self.handle_or_insert(channel);
        let mut games = handle.lock();
        let session = R::new_session(mode);
        let replaced = R::slot(&mut games.sessions)
            .replace(session.clone())
            .is_some();
        info!(channel, game = %R::KIND, ?mode, replaced, "game started");
        session
    }

    /// Restart an existing game from the initial position.
    ///
    /// The mode falls back to human-vs-human; callers wanting a solo game
    /// again must `start` with that mode.
    pub fn reset<R: SessionSlot>(&self, channel: &str) -> Result<GameSession<R::Piece>, EngineError> {
        let missing = || EngineError::NoActiveSession { kind: R::KIND };
        let handle = self.handle(channel).ok_or_else(missing)?;
        let mut games = handle.lock();
        let slot = R::slot(&mut games.sessions);
        if slot.is_none() {
            return Err(missing());
        }

        let session = R::new_session(GameMode::HumanVsHuman);
        *slot = Some(session.clone());
        info!(channel, game = %R::KIND, "game reset");
        Ok(session)
    }

    /// Run `f` against the channel's live session of game `R` while holding
    /// the channel lock.
    pub fn with_session<R, T, F>(&self, channel: &str, f: F) -> Result<T, EngineError>
    where
        R: SessionSlot,
        F: FnOnce(&mut GameSession<R::Piece>, &mut RandomEngine) -> Result<T, EngineError>,
    {
        let missing = || EngineError::NoActiveSession { kind: R::KIND };
        let handle = self.handle(channel).ok_or_else(missing)?;
        let mut guard = handle.lock();
        let ChannelGames { sessions, engine } = &mut *guard;
        let session = R::slot(sessions).as_mut().ok_or_else(missing)?;
        f(session, engine)
    }

    /// Run `f` on the channel's state, creating an empty entry if needed.
    pub fn with_channel<T>(&self, channel: &str, f: impl FnOnce(&mut ChannelGames) -> T) -> T {
        let handle = self.handle_or_insert(channel);
        let mut games = handle.lock();
        f(&mut games)
    }

    /// Forget every session of `channel`. Returns whether it existed.
    pub fn remove(&self, channel: &str) -> bool {
        let removed = self.channels.write().remove(channel).is_some();
        if removed {
            info!(channel, "channel removed");
        }
        removed
    }

    pub fn channel_count(&self) -> usize {
        self.channels.read().len()
    }

    fn handle(&self, channel: &str) -> Option<ChannelHandle> {
        self.channels.read().get(channel).cloned()
    }

    fn handle_or_insert(&self, channel: &str) -> ChannelHandle {
        if let Some(handle) = self.handle(channel) {
            return handle;
        }

        let mut channels = self.channels.write();
        channels
            .entry(channel.to_owned())
            .or_insert_with(|| {
                debug!(channel, "channel created");
                Arc::new(Mutex::new(ChannelGames {
                    sessions: ChannelSessions::default(),
                    engine: self.engine_for(channel),
                }))
            })
            .clone()
    }

    /// Seeded registries derive a distinct, reproducible stream per channel.
    fn engine_for(&self, channel: &str) -> RandomEngine {
        match self.config.rng_seed {
            Some(seed) => RandomEngine::seeded(channel_seed(seed, channel)),
            None => RandomEngine::new(),
        }
    }
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over the channel bytes, mixed into the configured seed. Stable
/// across builds so a seeded channel always replays the same games.
pub fn channel_seed(seed: u64, channel: &str) -> u64 {
    let hash = channel
        .bytes()
        .fold(FNV_OFFSET, |acc, byte| (acc ^ u64::from(byte)).wrapping_mul(FNV_PRIME));
    seed ^ hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_trait::Engine;
    use crate::utils::notation::parse_chess_position;

    fn registry() -> SessionRegistry {
        SessionRegistry::new(EngineConfig::default().with_seed(42))
    }

    fn sq(text: &str) -> Position {
        parse_chess_position(text).expect("test square should parse")
    }

    #[test]
    fn channel_seeds_are_fixed_values() {
        // Published FNV-1a 64 vectors.
        assert_eq!(channel_seed(0, ""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(channel_seed(0, "a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(channel_seed(0xff, "a"), 0xaf63_dc4c_8601_ec73);
        assert_ne!(channel_seed(42, "lobby"), channel_seed(42, "den"));
    }

    #[test]
    fn same_seed_and_channel_replay_the_same_game() {
        let play = || {
            let registry = registry();
            registry.start::<ChessRules>("lobby", GameMode::HumanVsHuman);
            registry
                .with_session::<ChessRules, _, _>("lobby", |session, engine| {
                    Ok(engine.play_turn::<ChessRules>(session))
                })
                .expect("session should exist")
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn unknown_channel_has_no_session() {
        let registry = registry();
        assert!(registry.get::<ChessRules>("lobby").is_none());
        assert_eq!(registry.channel_count(), 0);
    }

    #[test]
    fn start_creates_one_session_per_kind() {
        let registry = registry();
        registry.start::<ChessRules>("lobby", GameMode::HumanVsHuman);
        assert!(registry.get::<ChessRules>("lobby").is_some());
        assert!(registry.get::<DraughtsRules>("lobby").is_none());

        registry.start::<DraughtsRules>("lobby", GameMode::HumanVsAi);
        let draughts = registry
            .get::<DraughtsRules>("lobby")
            .expect("draughts session should exist");
        assert_eq!(draughts.mode, GameMode::HumanVsAi);
        assert_eq!(registry.channel_count(), 1);
    }

    #[test]
    fn start_replaces_a_game_in_progress() {
        let registry = registry();
        registry.start::<ChessRules>("lobby", GameMode::HumanVsHuman);
        registry
            .with_session::<ChessRules, _, _>("lobby", |session, _| {
                ChessRules::validate_move(session, sq("e2"), sq("e4"))?;
                ChessRules::apply_move(session, sq("e2"), sq("e4"));
                Ok(())
            })
            .expect("opening move should apply");
        assert_eq!(
            registry.get::<ChessRules>("lobby").map(|s| s.turn),
            Some(Color::Black)
        );

        let fresh = registry.start::<ChessRules>("lobby", GameMode::HumanVsHuman);
        assert_eq!(fresh.turn, Color::White);
        assert_eq!(registry.get::<ChessRules>("lobby"), Some(fresh));
    }

    #[test]
    fn reset_needs_an_existing_game_and_drops_solo_mode() {
        let registry = registry();
        assert_eq!(
            registry.reset::<ChessRules>("lobby").map(|_| ()),
            Err(EngineError::NoActiveSession {
                kind: GameKind::Chess
            })
        );

        registry.start::<DraughtsRules>("lobby", GameMode::HumanVsHuman);
        assert!(registry.reset::<ChessRules>("lobby").is_err());

        registry.start::<ChessRules>("lobby", GameMode::HumanVsAi);
        let reset = registry
            .reset::<ChessRules>("lobby")
            .expect("reset should succeed");
        assert_eq!(reset.mode, GameMode::HumanVsHuman);
        assert_eq!(reset.moves_played, 0);
    }

    #[test]
    fn channels_are_independent() {
        let registry = registry();
        registry.start::<ChessRules>("a", GameMode::HumanVsHuman);
        registry.start::<ChessRules>("b", GameMode::HumanVsHuman);
        registry
            .with_session::<ChessRules, _, _>("a", |session, _| {
                ChessRules::apply_move(session, sq("g1"), sq("f3"));
                Ok(())
            })
            .expect("channel a should exist");

        assert_eq!(registry.get::<ChessRules>("a").map(|s| s.turn), Some(Color::Black));
        assert_eq!(registry.get::<ChessRules>("b").map(|s| s.turn), Some(Color::White));
    }

    #[test]
    fn remove_forgets_the_channel() {
        let registry = registry();
        registry.start::<ChessRules>("a", GameMode::HumanVsHuman);
        assert!(registry.remove("a"));
        assert!(!registry.remove("a"));
        assert!(registry.get::<ChessRules>("a").is_none());
    }

    #[test]
    fn with_channel_sees_both_slots() {
        let registry = registry();
        registry.start::<DraughtsRules>("a", GameMode::HumanVsHuman);
        let (has_chess, has_draughts) = registry.with_channel("a", |games| {
            (games.sessions.chess.is_some(), games.sessions.draughts.is_some())
        });
        assert!(!has_chess);
        assert!(has_draughts);
    }

    #[test]
    fn parallel_channels_do_not_interfere() {
        let registry = registry();
        std::thread::scope(|scope| {
            for idx in 0..8 {
                let registry = &registry;
                scope.spawn(move || {
                    let channel = format!("channel-{idx}");
                    registry.start::<DraughtsRules>(&channel, GameMode::HumanVsHuman);
                    for _ in 0..10 {
                        registry
                            .with_session::<DraughtsRules, _, _>(&channel, |session, engine| {
                                use crate::engines::engine_trait::Engine;
                                engine.play_turn::<DraughtsRules>(session);
                                Ok(())
                            })
                            .expect("channel should exist");
                    }
                });
            }
        });

        assert_eq!(registry.channel_count(), 8);
        for idx in 0..8 {
            let session = registry
                .get::<DraughtsRules>(&format!("channel-{idx}"))
                .expect("session should exist");
            assert!(session.moves_played >= 1);
        }
    }
}
