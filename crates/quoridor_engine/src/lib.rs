//! # Quoridor Engine
//!
//! Rules engine and AI opponent for two-player Quoridor on a 9x9 board.
//!
//! - [`board`] - cell and wall-slot geometry, wall blocking
//! - [`move_gen`] - legal pawn moves, jumps and diagonal jumps
//! - [`wall_gen`] - wall overlap and reachability rules, wall candidates
//! - [`path`] - breadth-first reachability and shortest paths
//! - [`api`] - the immutable state machine
//! - [`evaluation`] / [`search`] - heuristics and alpha-beta minimax
//! - [`ai`] - difficulty tiers with a mandatory emergency fallback
//!
//! The engine is synchronous and does no I/O. Every transition takes a
//! `&GameState` and returns a new one.

pub mod ai;
pub mod api;
pub mod board;
pub mod constants;
pub mod display;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod path;
pub mod search;
pub mod types;
pub mod wall_gen;

pub use ai::{create_ai, Ai, AiStatistics, FallbackReason};
pub use api::{
    apply_action, apply_move, apply_wall, create_initial_state, force_turn_change, game_status,
    is_legal_action, ActionOutcome, GameStatus,
};
pub use error::{QuoridorEngineError, QuoridorEngineResult};
pub use move_gen::get_valid_moves;
pub use types::{Action, Difficulty, GameState, Orientation, Player, PlayerIndex, Position, Wall};
pub use wall_gen::{all_valid_walls, is_valid_wall_placement};
