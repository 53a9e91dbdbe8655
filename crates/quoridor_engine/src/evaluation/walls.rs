//! Wall evaluation
//!
//! A wall is worth the net path-length swing it causes: steps added to the
//! opponent's shortest path minus steps added to the mover's own. Walls that
//! would cut either player off are rejected outright with
//! [`REJECTED_WALL_SCORE`], so the AI never even ranks an illegal wall.

use crate::constants::*;
use crate::path::{path_or_synthetic, shortest_path};
use crate::types::*;
use crate::wall_gen::is_wall_slot_free;

/// Score a candidate wall for the player to move
pub fn evaluate_wall(wall: &Wall, state: &GameState) -> i32 {
    if !is_wall_slot_free(wall, state) {
        return REJECTED_WALL_SCORE;
    }

    let mover = state.current_player;
    let rival = opponent(mover);

    let mut hypothetical = state.walls.clone();
    hypothetical.push(*wall);

    let length = |player: PlayerIndex, walls: &[Wall]| {
        shortest_path(state.position_of(player), goal_row(player), walls).map(|p| p.len() as i32)
    };

    let (Some(rival_after), Some(own_after)) =
        (length(rival, &hypothetical), length(mover, &hypothetical))
    else {
        return REJECTED_WALL_SCORE;
    };

    let before = |player: PlayerIndex| {
        path_or_synthetic(state.position_of(player), goal_row(player), &state.walls).len() as i32
    };
    let rival_gain = rival_after - before(rival);
    let own_gain = own_after - before(mover);

    let mut score = (rival_gain - own_gain) * WALL_PATH_WEIGHT - WALL_BASE_COST;

    if rival_gain > 0 && state.row_distance(rival) <= INTERDICTION_ROW_DISTANCE {
        score += WALL_INTERDICTION_BONUS;
    }

    if state.player(mover).walls_left <= WALL_SCARCITY_THRESHOLD {
        score -= WALL_SCARCITY_PENALTY;
    }

    score
}
