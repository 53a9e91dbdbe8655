//! Per-decision AI statistics

use crate::error::QuoridorEngineError;
use crate::types::Difficulty;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the emergency fallback replaced a tier's decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The search machinery reported an inconsistency
    SearchFailed,
    /// The tier had nothing to offer
    NoDecision,
    /// The tier's action failed re-validation
    IllegalDecision,
    /// The tier panicked
    Panicked,
}

impl From<&QuoridorEngineError> for FallbackReason {
    fn from(err: &QuoridorEngineError) -> Self {
        match err {
            QuoridorEngineError::SearchError { .. } => FallbackReason::SearchFailed,
            QuoridorEngineError::NoCandidateActions { .. } => FallbackReason::NoDecision,
            QuoridorEngineError::IllegalDecision { .. } => FallbackReason::IllegalDecision,
            QuoridorEngineError::StrategyPanicked { .. } => FallbackReason::Panicked,
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FallbackReason::SearchFailed => "search failed",
            FallbackReason::NoDecision => "no decision",
            FallbackReason::IllegalDecision => "illegal decision",
            FallbackReason::Panicked => "strategy panicked",
        };
        f.write_str(text)
    }
}

/// What the AI did on its last call to [`crate::ai::Ai::decide`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiStatistics {
    pub difficulty: Difficulty,
    /// Search nodes visited (hard tier only)
    pub nodes: u64,
    /// Alpha-beta cutoffs taken (hard tier only)
    pub cutoffs: u64,
    /// Score of the chosen action under the tier's own heuristic
    pub score: Option<i32>,
    pub fallback: Option<FallbackReason>,
    /// No legal action could be found at all
    pub stuck: bool,
}

impl AiStatistics {
    pub fn new(difficulty: Difficulty) -> Self {
        AiStatistics {
            difficulty,
            ..Default::default()
        }
    }

    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}
