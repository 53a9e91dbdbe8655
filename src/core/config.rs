//! Match configuration
//!
//! A [`MatchConfig`] says who sits in each seat, how many games to play, how
//! long a game may run and, optionally, which seed drives the AI. It is
//! stored as JSON:
//!
//! ```json
//! {
//!   "seats": [
//!     {"controller": "ai", "difficulty": "easy"},
//!     {"controller": "ai", "difficulty": "hard"}
//!   ],
//!   "seed": 7,
//!   "max_turns": 200,
//!   "games": 10
//! }
//! ```
//!
//! # Error Handling
//!
//! [`read_config`] reports every failure. [`load_config`] is the forgiving
//! startup path: a missing, unreadable or invalid file is logged and the
//! defaults are used instead.

use crate::core::error::{ConfigError, ConfigResult};
use quoridor_engine::constants::PLAYER_COUNT;
use quoridor_engine::types::{Difficulty, PlayerIndex};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default cap on turns (both players' turns counted) before a game is drawn
pub const DEFAULT_MAX_TURNS: usize = 400;

/// Who controls a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "controller", rename_all = "lowercase")]
pub enum SeatConfig {
    /// Actions arrive from outside through `GameSession::submit_action`
    Human,
    /// Played by the engine AI
    Ai {
        #[serde(default)]
        difficulty: Difficulty,
    },
}

impl SeatConfig {
    pub fn is_ai(&self) -> bool {
        matches!(self, SeatConfig::Ai { .. })
    }
}

impl Default for SeatConfig {
    fn default() -> Self {
        SeatConfig::Ai {
            difficulty: Difficulty::default(),
        }
    }
}

/// Settings for a run of one or more games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub seats: [SeatConfig; PLAYER_COUNT],
    /// Base seed for AI randomness; `None` seeds from the OS
    pub seed: Option<u64>,
    pub max_turns: usize,
    pub games: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            seats: [SeatConfig::default(); PLAYER_COUNT],
            seed: None,
            max_turns: DEFAULT_MAX_TURNS,
            games: 1,
        }
    }
}

impl MatchConfig {
    /// Seed for one seat in one game, derived from the base seed
    ///
    /// Each seat of each game gets its own stream so that replaying a
    /// single game from a batch reproduces it exactly.
    pub fn seat_seed(&self, game_index: usize, player: PlayerIndex) -> Option<u64> {
        self.seed.map(|base| {
            base.wrapping_add((game_index * PLAYER_COUNT + player) as u64)
        })
    }

    /// Reject configurations that cannot produce a game
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_turns == 0 {
            return Err(ConfigError::Invalid {
                message: "max_turns must be at least 1".to_string(),
            });
        }
        if self.games == 0 {
            return Err(ConfigError::Invalid {
                message: "games must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Read and validate a config file
pub fn read_config(path: &Path) -> ConfigResult<MatchConfig> {
    let contents = fs::read_to_string(path)?;
    let config: MatchConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Load a config file, falling back to defaults on any failure
pub fn load_config(path: &Path) -> MatchConfig {
    if !path.exists() {
        info!("[CONFIG] No config file found at {:?}. Using defaults.", path);
        return MatchConfig::default();
    }

    match read_config(path) {
        Ok(config) => {
            info!("[CONFIG] Loaded match config from {:?}", path);
            config
        }
        Err(e) => {
            warn!(
                "[CONFIG] Failed to load config file at {:?}: {}. Using defaults.",
                path, e
            );
            MatchConfig::default()
        }
    }
}

/// Write a config file as pretty JSON, creating parent directories
pub fn save_config(path: &Path, config: &MatchConfig) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    info!("[CONFIG] Saved match config to {:?}", path);
    Ok(())
}
