//! Crate root module declarations for the Plum Boards engine.
//!
//! Per-channel chess and draughts sessions: board model and notation, the
//! two rule engines, the random opponent, the session registry and the
//! command front-end used by chat hosts and the console binary.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod board_types;
    pub mod game_session;
}

pub mod move_generation {
    pub mod chess_rules;
    pub mod draughts_rules;
    pub mod rule_engine;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod registry {
    pub mod session_registry;
}

pub mod commands {
    pub mod command_top;
}

pub mod utils {
    pub mod layout_parser;
    pub mod notation;
    pub mod render_board;
}
