//! Minimax search with alpha-beta pruning
//!
//! This module implements the hard tier's look-ahead:
//! - Minimax with alpha-beta pruning to a fixed shallow depth
//! - A bounded action set per node (all pawn moves plus a capped number of
//!   path-cutting and randomly sampled walls)
//! - Move ordering so the most promising pawn moves are searched first
//!
//! The AI is always the maximizing player; the opponent minimizes.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core alpha-beta recursion
//! - `ordering` - Per-node action generation and ordering

mod alphabeta;
mod ordering;

pub use alphabeta::SearchStats;
pub use ordering::generate_actions;

use crate::error::{QuoridorEngineError, QuoridorEngineResult};
use crate::types::*;
use alphabeta::Searcher;
use rand::Rng;

/// Best root action found by [`find_best_action`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub action: Action,
    pub score: i32,
    pub stats: SearchStats,
}

/// Search `depth` plies from `state` for the player to move
///
/// # Errors
///
/// Returns [`QuoridorEngineError::NoCandidateActions`] when the side to move
/// has nothing to play, and [`QuoridorEngineError::SearchError`] if a
/// generated action fails to apply.
pub fn find_best_action<R: Rng + ?Sized>(
    state: &GameState,
    depth: u32,
    rng: &mut R,
) -> QuoridorEngineResult<SearchResult> {
    let perspective = state.current_player;
    let mut searcher = Searcher::new(perspective, rng);
    let (action, score) = searcher.search_root(state, depth.max(1))?;

    let action = action.ok_or(QuoridorEngineError::NoCandidateActions {
        player: perspective,
    })?;

    tracing::trace!(
        "[SEARCH] depth={} nodes={} cutoffs={} best={} score={}",
        depth,
        searcher.stats.nodes,
        searcher.stats.cutoffs,
        action,
        score
    );

    Ok(SearchResult {
        action,
        score,
        stats: searcher.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{create_initial_state, is_legal_action};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_find_best_action_starting_position() {
        let state = create_initial_state();
        let mut rng = StdRng::seed_from_u64(1);
        let result = find_best_action(&state, 2, &mut rng).unwrap();
        assert!(is_legal_action(&state, &result.action));
        assert!(result.stats.nodes > 0);
    }

    #[test]
    fn test_search_takes_immediate_win() {
        //! One step from goal, nothing the opponent does can matter
        let mut state = create_initial_state();
        state.players[0].position = Position::new(2, 7);
        let mut rng = StdRng::seed_from_u64(3);
        let result = find_best_action(&state, 2, &mut rng).unwrap();
        assert_eq!(result.action, Action::Move(Position::new(2, 8)));
    }

    #[test]
    fn test_search_blocks_opponent_about_to_win() {
        //! Player 1 wins next move from (0, 1) unless player 0 walls them off,
        //! while player 0 is still far from goal
        let mut state = create_initial_state();
        state.players[0].position = Position::new(8, 0);
        state.players[1].position = Position::new(0, 1);
        let mut rng = StdRng::seed_from_u64(5);
        let result = find_best_action(&state, 2, &mut rng).unwrap();
        match result.action {
            Action::Wall(wall) => {
                assert!(crate::board::wall_blocks_step(
                    &wall,
                    Position::new(0, 1),
                    Position::new(0, 0)
                ));
            }
            other => panic!("expected a blocking wall, got {other}"),
        }
    }

    #[test]
    fn test_no_actions_is_an_error() {
        let mut state = create_initial_state();
        state.winner = Some(0);
        let mut rng = StdRng::seed_from_u64(9);
        assert!(matches!(
            find_best_action(&state, 2, &mut rng),
            Err(QuoridorEngineError::NoCandidateActions { .. })
        ));
    }
}
