//! Leaf evaluation for search
//!
//! Scores a position from a fixed player's point of view: wins and losses at
//! the extremes, otherwise a weighted sum of shortest-path, row-distance and
//! wall-supply differentials.

use crate::constants::*;
use crate::path::shortest_path_length;
use crate::types::*;

/// Evaluate a position for `perspective`
pub fn evaluate_position(state: &GameState, perspective: PlayerIndex) -> i32 {
    let rival = opponent(perspective);

    match state.winner {
        Some(winner) if winner == perspective => return WIN_SCORE,
        Some(_) => return -WIN_SCORE,
        None => {}
    }

    let path_diff = shortest_path_length(state, rival) - shortest_path_length(state, perspective);
    let row_diff = state.row_distance(rival) - state.row_distance(perspective);
    let wall_diff =
        state.player(perspective).walls_left as i32 - state.player(rival).walls_left as i32;

    path_diff * PATH_WEIGHT + row_diff * ROW_WEIGHT + wall_diff * WALLS_LEFT_WEIGHT
}
