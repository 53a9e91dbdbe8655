//! Alpha-beta minimax
//!
//! Plain recursive minimax: the search depth is a fixed two plies, so the
//! call stack never grows beyond a handful of frames. Scores are always from
//! the searching player's point of view; the side to move at each node
//! decides whether it maximizes or minimizes.

use super::ordering::generate_actions;
use crate::api::{apply_action, ActionOutcome};
use crate::constants::*;
use crate::error::{QuoridorEngineError, QuoridorEngineResult};
use crate::evaluation::evaluate_position;
use crate::types::*;
use rand::Rng;

/// Node and cutoff counters for one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, leaves included
    pub nodes: u64,
    /// Beta or alpha cutoffs taken
    pub cutoffs: u64,
}

pub(super) struct Searcher<'r, R: Rng + ?Sized> {
    perspective: PlayerIndex,
    rng: &'r mut R,
    pub(super) stats: SearchStats,
}

impl<'r, R: Rng + ?Sized> Searcher<'r, R> {
    pub(super) fn new(perspective: PlayerIndex, rng: &'r mut R) -> Self {
        Searcher {
            perspective,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Search the root, returning the best action and its score
    pub(super) fn search_root(
        &mut self,
        state: &GameState,
        depth: u32,
    ) -> QuoridorEngineResult<(Option<Action>, i32)> {
        self.stats.nodes += 1;
        let actions = generate_actions(state, &mut *self.rng);

        let mut alpha = -AB_INF;
        let mut best: Option<(Action, i32)> = None;

        for action in actions {
            let child = self.child(state, &action)?;
            let score = self.alphabeta(&child, depth - 1, 1, alpha, AB_INF)?;
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((action, score)),
            }
            alpha = alpha.max(score);
        }

        Ok(match best {
            Some((action, score)) => (Some(action), score),
            None => (None, self.leaf(state, 0)),
        })
    }

    fn alphabeta(
        &mut self,
        state: &GameState,
        depth: u32,
        ply: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> QuoridorEngineResult<i32> {
        self.stats.nodes += 1;

        if depth == 0 || state.is_finished() {
            return Ok(self.leaf(state, ply));
        }

        let actions = generate_actions(state, &mut *self.rng);
        if actions.is_empty() {
            return Ok(self.leaf(state, ply));
        }

        let maximizing = state.current_player == self.perspective;
        let mut best = if maximizing { -AB_INF } else { AB_INF };

        for action in actions {
            let child = self.child(state, &action)?;
            let score = self.alphabeta(&child, depth - 1, ply + 1, alpha, beta)?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }

    fn child(&self, state: &GameState, action: &Action) -> QuoridorEngineResult<GameState> {
        match apply_action(state, action) {
            ActionOutcome::Applied(next) => Ok(next),
            ActionOutcome::Rejected => Err(QuoridorEngineError::SearchError {
                message: format!(
                    "generated action {} rejected for player {}",
                    action, state.current_player
                ),
            }),
        }
    }

    /// Static score, preferring faster wins and slower losses
    fn leaf(&self, state: &GameState, ply: i32) -> i32 {
        let score = evaluate_position(state, self.perspective);
        if score >= WIN_SCORE {
            score - ply
        } else if score <= -WIN_SCORE {
            score + ply
        } else {
            score
        }
    }
}
