//! Game module - turn sequencing around the Quoridor engine
//!
//! The engine is a set of pure functions; this module is the caller that
//! owns the current [`GameState`], knows which seat is human and which is an
//! AI, and feeds every action back through the engine's state machine.
//!
//! # Module Organization
//!
//! - `session` - [`GameSession`] turn driver and [`MatchOutcome`] summaries
//! - `error` - [`GameError`] for out-of-order session use
//!
//! [`GameState`]: quoridor_engine::types::GameState

pub mod error;
pub mod session;

pub use error::{GameError, GameResult};
pub use session::{GameSession, MatchOutcome, Seat, TurnOutcome};
