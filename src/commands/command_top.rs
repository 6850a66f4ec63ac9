//! Command front-end for the board engine.
//!
//! Turns `(channel, kind, verb, args)` requests into registry and rule-engine
//! calls and answers with the rendered board plus a status line. A move in a
//! solo game is validated, applied and answered by the computer inside one
//! locked transaction on the channel.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::EngineError;
use crate::game_state::board_types::*;
use crate::game_state::game_session::GameSession;
use crate::move_generation::chess_rules::ChessRules;
use crate::move_generation::draughts_rules::DraughtsRules;
use crate::move_generation::rule_engine::RuleEngine;
use crate::registry::session_registry::{SessionRegistry, SessionSlot};
use crate::utils::notation::{format_position, parse_position};
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// Start a new game; `None` uses the configured default mode.
    Start { mode: Option<GameMode> },
    Select { square: String },
    /// Move `from` to `to`, or the selected piece when `from` is omitted.
    Move { from: Option<String>, to: String },
    ShowBoard,
    Reset,
    /// Let the computer play the side to move.
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: GameKind,
    pub verb: Verb,
}

/// What a command hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub board: String,
    pub status: String,
    pub started_at: DateTime<Utc>,
}

impl Reply {
    fn from_session<P: BoardPiece>(session: &GameSession<P>) -> Self {
        Self {
            board: render_board(&session.board, session.kind),
            status: session.status_text.clone(),
            started_at: session.started_at,
        }
    }
}

/// Parse a console line of the form `<kind> <verb> [args]`.
///
/// Kinds: `chess`, `draughts` (or `checkers`). Verbs: `start [solo]`,
/// `select <sq>`, `move [<from>] <to>`, `board`, `reset`, `ai`.
pub fn parse_command(line: &str) -> Result<Command, EngineError> {
    let unknown = || EngineError::UnknownCommand(line.trim().to_owned());
    let mut parts = line.split_whitespace();

    let kind = match parts.next().map(str::to_ascii_lowercase).as_deref() {
        Some("chess") => GameKind::Chess,
        Some("draughts") | Some("checkers") => GameKind::Draughts,
        _ => return Err(unknown()),
    };
    let verb_word = parts.next().map(str::to_ascii_lowercase).ok_or_else(unknown)?;
    let args: Vec<&str> = parts.collect();

    let verb = match (verb_word.as_str(), args.as_slice()) {
        ("start", []) => Verb::Start { mode: None },
        ("start", [mode]) => match mode.to_ascii_lowercase().as_str() {
            "solo" | "ai" => Verb::Start {
                mode: Some(GameMode::HumanVsAi),
            },
            "duo" | "pvp" => Verb::Start {
                mode: Some(GameMode::HumanVsHuman),
            },
            _ => return Err(unknown()),
        },
        ("select", [square]) => Verb::Select {
            square: (*square).to_owned(),
        },
        ("move", [to]) => Verb::Move {
            from: None,
            to: (*to).to_owned(),
        },
        ("move", [from, to]) => Verb::Move {
            from: Some((*from).to_owned()),
            to: (*to).to_owned(),
        },
        ("board" | "show", []) => Verb::ShowBoard,
        ("reset", []) => Verb::Reset,
        ("ai", []) => Verb::Ai,
        _ => return Err(unknown()),
    };

    Ok(Command { kind, verb })
}

/// Execute `command` against `channel`'s session.
pub fn execute(
    registry: &SessionRegistry,
    channel: &str,
    command: &Command,
) -> Result<Reply, EngineError> {
    debug!(channel, game = %command.kind, verb = ?command.verb, "executing command");
    match command.kind {
        GameKind::Chess => execute_for::<ChessRules>(registry, channel, &command.verb),
        GameKind::Draughts => execute_for::<DraughtsRules>(registry, channel, &command.verb),
    }
}

fn execute_for<R: SessionSlot>(
    registry: &SessionRegistry,
    channel: &str,
    verb: &Verb,
) -> Result<Reply, EngineError> {
    match verb {
        Verb::Start { mode } => {
            let mode = mode.unwrap_or(registry.config().default_mode);
            Ok(Reply::from_session(&registry.start::<R>(channel, mode)))
        }
        Verb::Reset => registry
            .reset::<R>(channel)
            .map(|session| Reply::from_session(&session)),
        Verb::ShowBoard => registry
            .get::<R>(channel)
            .map(|session| Reply::from_session(&session))
            .ok_or(EngineError::NoActiveSession { kind: R::KIND }),
        Verb::Select { square } => registry.with_session::<R, _, _>(channel, |session, _| {
            let pos = parse_position(R::KIND, square)?;
            session.select(pos)?;
            Ok(Reply::from_session(session))
        }),
        Verb::Move { from, to } => {
            registry.with_session::<R, _, _>(channel, |session, engine| {
                let to = parse_position(R::KIND, to)?;
                let from = match from {
                    Some(text) => parse_position(R::KIND, text)?,
                    None => session.selected.ok_or(EngineError::NoSelection)?,
                };

                R::validate_move(session, from, to)?;
                R::apply_move(session, from, to);
                debug!(
                    channel,
                    game = %R::KIND,
                    from = %format_position(R::KIND, from),
                    to = %format_position(R::KIND, to),
                    "move applied"
                );

                answer_if_ai_to_move::<R>(session, engine);
                Ok(Reply::from_session(session))
            })
        }
        Verb::Ai => registry.with_session::<R, _, _>(channel, |session, engine| {
            let side = session.turn;
            if engine.play_turn::<R>(session).is_empty() {
                return Err(EngineError::NoMoveAvailable(side));
            }
            // In a solo game the human may hand their turn to the engine.
            answer_if_ai_to_move::<R>(session, engine);
            Ok(Reply::from_session(session))
        }),
    }
}

/// Let the computer reply in a solo game once the turn has reached its side.
fn answer_if_ai_to_move<R: RuleEngine>(
    session: &mut GameSession<R::Piece>,
    engine: &mut RandomEngine,
) {
    if session.ai_to_move() && engine.play_turn::<R>(session).is_empty() {
        session.note_no_moves();
    }
}
