//! Wall legality and wall candidate generation
//!
//! A candidate wall is legal for the player to move iff:
//! 1. The game is still in progress
//! 2. It anchors on an interior slot
//! 3. The player still has walls in hand
//! 4. It overlaps no placed wall (same line within one slot, or a cross)
//! 5. With the wall added, **both** players can still reach their goal rows
//!
//! The reachability check runs against the hypothetical wall set before the
//! wall is committed, so a published state never encloses a pawn.

use crate::board::*;
use crate::constants::*;
use crate::path::has_path_to_row;
use crate::types::*;
use rand::Rng;
use std::collections::HashSet;

/// Check if two walls occupy any common stretch of board edge
///
/// Parallel walls on the same line overlap when their anchors are within one
/// slot of each other. Perpendicular walls overlap when they cross at the
/// same midpoint.
pub fn walls_overlap(a: &Wall, b: &Wall) -> bool {
    match (a.orientation, b.orientation) {
        (Orientation::Horizontal, Orientation::Horizontal) => {
            a.z == b.z && (a.x - b.x).abs() <= 1
        }
        (Orientation::Vertical, Orientation::Vertical) => a.x == b.x && (a.z - b.z).abs() <= 1,
        _ => a.x == b.x && a.z == b.z,
    }
}

/// Check if a wall overlaps any wall in the list
#[inline]
pub fn overlaps_any(wall: &Wall, walls: &[Wall]) -> bool {
    walls.iter().any(|placed| walls_overlap(wall, placed))
}

/// Check if both players can reach their goal rows with `candidate` added
pub fn keeps_goals_reachable(state: &GameState, candidate: &Wall) -> bool {
    let mut hypothetical = Vec::with_capacity(state.walls.len() + 1);
    hypothetical.extend_from_slice(&state.walls);
    hypothetical.push(*candidate);

    (0..PLAYER_COUNT)
        .all(|player| has_path_to_row(state.position_of(player), goal_row(player), &hypothetical))
}

/// Check the cheap, local rules for a candidate wall (everything but reachability)
pub fn is_wall_slot_free(wall: &Wall, state: &GameState) -> bool {
    !state.is_finished()
        && is_wall_slot_within_board(wall)
        && state.player(state.current_player).walls_left > 0
        && !overlaps_any(wall, &state.walls)
}

/// Check if the player to move may place `wall`
pub fn is_valid_wall_placement(wall: &Wall, state: &GameState) -> bool {
    is_wall_slot_free(wall, state) && keeps_goals_reachable(state, wall)
}

/// Every wall slot on the board, both orientations
pub fn all_wall_slots() -> impl Iterator<Item = Wall> {
    (0..WALL_SLOTS_PER_AXIS).flat_map(|x| {
        (0..WALL_SLOTS_PER_AXIS).flat_map(move |z| {
            Orientation::ALL
                .into_iter()
                .map(move |orientation| Wall::new(x, z, orientation))
        })
    })
}

/// Every wall the player to move may legally place
pub fn all_valid_walls(state: &GameState) -> Vec<Wall> {
    if state.is_finished() || state.player(state.current_player).walls_left == 0 {
        return Vec::new();
    }
    all_wall_slots()
        .filter(|wall| is_valid_wall_placement(wall, state))
        .collect()
}

/// Pick a uniformly random wall slot
pub fn random_wall_slot<R: Rng + ?Sized>(rng: &mut R) -> Wall {
    let x = rng.random_range(0..WALL_SLOTS_PER_AXIS);
    let z = rng.random_range(0..WALL_SLOTS_PER_AXIS);
    let orientation = if rng.random_bool(0.5) {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Wall::new(x, z, orientation)
}

/// Sample up to `count` distinct legal walls by trying random slots
///
/// Stops after `attempts` tries even if fewer than `count` were found.
pub fn sample_valid_walls<R: Rng + ?Sized>(
    state: &GameState,
    count: usize,
    attempts: usize,
    rng: &mut R,
) -> Vec<Wall> {
    let mut found = Vec::with_capacity(count);
    if count == 0 || state.is_finished() || state.player(state.current_player).walls_left == 0 {
        return found;
    }

    let mut tried = HashSet::new();
    for _ in 0..attempts {
        if found.len() >= count {
            break;
        }
        let wall = random_wall_slot(rng);
        if !tried.insert(wall) {
            continue;
        }
        if is_valid_wall_placement(&wall, state) {
            found.push(wall);
        }
    }

    found
}

/// Walls that would cut the boundary crossed by a single step
///
/// A vertical step is cut by the two horizontal walls covering its column at
/// that row boundary; a horizontal step by the two vertical walls covering
/// its row. Candidates off the slot grid are dropped.
pub fn walls_cutting_step(from: Position, to: Position) -> Vec<Wall> {
    let candidates = if from.x == to.x {
        let z = from.z.min(to.z);
        [Wall::horizontal(from.x, z), Wall::horizontal(from.x - 1, z)]
    } else {
        let x = from.x.min(to.x);
        [Wall::vertical(x, from.z), Wall::vertical(x, from.z - 1)]
    };
    candidates
        .into_iter()
        .filter(is_wall_slot_within_board)
        .collect()
}

/// Legal walls that cut the first few steps of a player's shortest path
///
/// Walks `steps` steps of `target`'s path and keeps, in path order, the
/// legal walls (for the player to move) that block any of them.
pub fn path_cutting_walls(state: &GameState, target: PlayerIndex, steps: usize) -> Vec<Wall> {
    if state.is_finished() || state.player(state.current_player).walls_left == 0 {
        return Vec::new();
    }

    let path = crate::path::path_to_goal(state, target, &state.walls);
    let mut previous = state.position_of(target);
    let mut walls = Vec::new();

    for &next in path.iter().take(steps) {
        for wall in walls_cutting_step(previous, next) {
            if !walls.contains(&wall) && is_valid_wall_placement(&wall, state) {
                walls.push(wall);
            }
        }
        previous = next;
    }

    walls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{apply_wall, create_initial_state};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parallel_overlap_rules() {
        let wall = Wall::horizontal(2, 2);
        assert!(walls_overlap(&wall, &Wall::horizontal(2, 2)));
        assert!(walls_overlap(&wall, &Wall::horizontal(1, 2)));
        assert!(walls_overlap(&wall, &Wall::horizontal(3, 2)));
        assert!(!walls_overlap(&wall, &Wall::horizontal(4, 2)));
        assert!(!walls_overlap(&wall, &Wall::horizontal(2, 3)));

        let wall = Wall::vertical(5, 5);
        assert!(walls_overlap(&wall, &Wall::vertical(5, 4)));
        assert!(!walls_overlap(&wall, &Wall::vertical(5, 3)));
        assert!(!walls_overlap(&wall, &Wall::vertical(6, 5)));
    }

    #[test]
    fn test_cross_overlap_rules() {
        //! Perpendicular walls only collide when they share a midpoint
        assert!(walls_overlap(&Wall::horizontal(3, 3), &Wall::vertical(3, 3)));
        assert!(!walls_overlap(&Wall::horizontal(3, 3), &Wall::vertical(4, 3)));
        assert!(!walls_overlap(&Wall::horizontal(3, 3), &Wall::vertical(3, 2)));
    }

    #[test]
    fn test_valid_wall_on_fresh_board() {
        let state = create_initial_state();
        assert!(is_valid_wall_placement(&Wall::horizontal(3, 4), &state));
        assert!(!is_valid_wall_placement(&Wall::horizontal(8, 4), &state));
    }

    #[test]
    fn test_no_walls_left_rejects_placement() {
        let mut state = create_initial_state();
        state.players[0].walls_left = 0;
        assert!(!is_valid_wall_placement(&Wall::horizontal(3, 4), &state));
        assert!(all_valid_walls(&state).is_empty());
    }

    #[test]
    fn test_wall_that_encloses_a_player_is_rejected() {
        //! Closing the last gap around player 0's corner pocket is illegal
        let mut state = create_initial_state();
        state.players[0].position = Position::new(0, 0);
        state.walls = vec![Wall::vertical(1, 0)];
        state.wall_owners = vec![1];
        // Completing a 2x2 box around (0,0)-(1,1)
        assert!(!is_valid_wall_placement(&Wall::horizontal(0, 1), &state));
        // A wall elsewhere on the same line is fine
        assert!(is_valid_wall_placement(&Wall::horizontal(2, 1), &state));
    }

    #[test]
    fn test_enclosing_the_opponent_is_also_rejected() {
        let mut state = create_initial_state();
        state.players[1].position = Position::new(8, 8);
        state.walls = vec![Wall::vertical(6, 7)];
        state.wall_owners = vec![1];
        assert!(!is_valid_wall_placement(&Wall::horizontal(7, 6), &state));
    }

    #[test]
    fn test_all_valid_walls_on_fresh_board() {
        //! Nothing is placed yet, so every one of the 128 slots is legal
        let state = create_initial_state();
        assert_eq!(all_valid_walls(&state).len(), 128);
    }

    #[test]
    fn test_all_valid_walls_excludes_overlaps() {
        let state = apply_wall(3, 3, Orientation::Horizontal, &create_initial_state());
        let walls = all_valid_walls(&state);
        // Three parallel overlaps plus the crossing wall are gone
        assert_eq!(walls.len(), 128 - 4);
        assert!(!walls.contains(&Wall::vertical(3, 3)));
        assert!(walls.contains(&Wall::vertical(3, 2)));
    }

    #[test]
    fn test_sample_valid_walls_are_distinct_and_legal() {
        let state = create_initial_state();
        let mut rng = StdRng::seed_from_u64(7);
        let sample = sample_valid_walls(&state, 8, 100, &mut rng);
        assert_eq!(sample.len(), 8);
        let distinct: HashSet<_> = sample.iter().collect();
        assert_eq!(distinct.len(), 8);
        assert!(sample.iter().all(|w| is_valid_wall_placement(w, &state)));
    }

    #[test]
    fn test_walls_cutting_step() {
        let cuts = walls_cutting_step(Position::new(4, 0), Position::new(4, 1));
        assert_eq!(cuts, vec![Wall::horizontal(4, 0), Wall::horizontal(3, 0)]);

        let cuts = walls_cutting_step(Position::new(0, 0), Position::new(0, 1));
        assert_eq!(cuts, vec![Wall::horizontal(0, 0)]);

        let cuts = walls_cutting_step(Position::new(8, 8), Position::new(7, 8));
        assert_eq!(cuts, vec![Wall::vertical(7, 7)]);
    }

    #[test]
    fn test_path_cutting_walls_block_opponent() {
        let state = create_initial_state();
        let walls = path_cutting_walls(&state, 1, 2);
        assert!(!walls.is_empty());
        let opponent_start = state.position_of(1);
        let first = crate::path::path_to_goal(&state, 1, &state.walls)[0];
        assert!(walls
            .iter()
            .any(|w| wall_blocks_step(w, opponent_start, first)));
    }
}
