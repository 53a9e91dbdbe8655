//! Public API for the Quoridor engine
//!
//! Provides the state machine entry points consumed by the rendering/UI
//! layer. Every transition borrows the current [`GameState`] and returns a
//! new one; rejected actions return an unchanged copy.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (create_initial_state, force_turn_change)
//! - `moves` - Action execution (apply_move, apply_wall, apply_action)
//! - `state` - Game status queries (game_status)
//!
//! [`GameState`]: crate::types::GameState

mod game;
mod moves;
mod state;

pub use game::{create_initial_state, force_turn_change};
pub use moves::{apply_action, apply_move, apply_wall, is_legal_action, ActionOutcome};
pub use state::{game_status, GameStatus};
