//! Move evaluation
//!
//! Rewards moves that shorten the mover's path to goal, with small bonuses
//! for overtaking the opponent and for raw row progress.

use crate::constants::*;
use crate::path::{distance_to_goal, path_or_synthetic, shortest_path_length};
use crate::types::*;

/// Score a candidate destination for the player to move
///
/// Does not check legality; callers feed it destinations from
/// [`crate::move_gen::get_valid_moves`].
pub fn evaluate_move(candidate: Position, state: &GameState) -> i32 {
    let mover = state.current_player;
    let goal = goal_row(mover);

    if candidate.z == goal {
        return GOAL_MOVE_BONUS;
    }

    let before = shortest_path_length(state, mover);
    let after = path_or_synthetic(candidate, goal, &state.walls).len() as i32;
    let opponent_length = shortest_path_length(state, opponent(mover));

    let mut score = (before - after) * MOVE_PATH_WEIGHT;

    if after < opponent_length {
        score += MOVE_LEAD_BONUS;
    }

    let rows_before = distance_to_goal(state, mover);
    let rows_after = (candidate.z as i32 - goal as i32).abs();
    score += (rows_before - rows_after).signum() * MOVE_DIRECTION_BONUS;

    score
}
