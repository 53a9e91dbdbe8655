//! Error types for game module
//!
//! Illegal moves and walls are not errors here: the engine hands back the
//! unchanged state and the session reports [`TurnOutcome::Rejected`]. These
//! variants describe a caller driving the session out of order.
//!
//! [`TurnOutcome::Rejected`]: crate::game::session::TurnOutcome::Rejected

use quoridor_engine::types::PlayerIndex;

/// Errors that can occur while driving a game session
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// An external action was submitted while an AI seat is to move
    #[error("Player {player} is AI-controlled and cannot accept submitted actions")]
    NotHumanTurn { player: PlayerIndex },

    /// An AI turn was requested while a human seat is to move
    #[error("Player {player} is human-controlled; waiting for a submitted action")]
    NotAiTurn { player: PlayerIndex },

    /// The game already has a winner
    #[error("Game is over: player {winner} has won")]
    GameFinished { winner: PlayerIndex },

    /// The session reached its turn limit without a winner
    #[error("Turn limit of {limit} reached without a winner")]
    TurnLimitExceeded { limit: usize },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
