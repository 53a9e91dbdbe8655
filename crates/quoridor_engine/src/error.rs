//! Error types for the Quoridor engine
//!
//! Rejected moves and walls are not errors: the state machine hands back the
//! unchanged state. These variants describe failures inside the AI's own
//! reasoning, which never escape [`crate::ai::Ai::decide`] and instead select
//! the next fallback tier.

use crate::types::Action;
use thiserror::Error;

/// Errors that can occur while the AI reasons about a position
#[derive(Error, Debug)]
pub enum QuoridorEngineError {
    /// Search algorithm error - inconsistent state or logic error
    #[error("Search algorithm error: {message}")]
    SearchError { message: String },

    /// The tier produced no action at all
    #[error("No candidate actions for player {player}")]
    NoCandidateActions { player: usize },

    /// The tier produced an action that fails re-validation
    #[error("Decision {action} is illegal for player {player}")]
    IllegalDecision { action: Action, player: usize },

    /// A tier strategy panicked and was caught at the AI boundary
    #[error("Strategy panicked: {message}")]
    StrategyPanicked { message: String },
}

/// Result type alias for engine operations
pub type QuoridorEngineResult<T> = Result<T, QuoridorEngineError>;
