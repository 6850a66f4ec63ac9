//! Host-supplied engine configuration.

use crate::game_state::board_types::GameMode;

pub const DEFAULT_CHANNEL: &str = "console";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seed for the per-channel random engines. `None` draws from the OS.
    pub rng_seed: Option<u64>,
    pub default_channel: String,
    /// Mode used by `start` when the command does not name one.
    pub default_mode: GameMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            default_channel: DEFAULT_CHANNEL.to_owned(),
            default_mode: GameMode::HumanVsHuman,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_default_mode(mut self, mode: GameMode) -> Self {
        self.default_mode = mode;
        self
    }
}
