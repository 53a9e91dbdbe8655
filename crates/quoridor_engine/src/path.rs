//! Reachability and shortest paths
//!
//! Breadth-first search over the 9x9 cell graph, where two orthogonal
//! neighbours are connected iff no wall blocks the step between them. Pawns
//! never block paths; only walls do.
//!
//! Two flavours are provided:
//! - [`has_path_to_row`] answers the wall-legality question "can this pawn
//!   still reach its goal row?"
//! - [`shortest_path`] returns the path itself, capped at
//!   [`BFS_ITERATION_CAP`] dequeues, and is what the AI heuristics use via
//!   [`path_to_goal`], which never fails.

use crate::board::*;
use crate::constants::*;
use crate::types::*;
use std::collections::VecDeque;

type CellGrid<T> = [[T; BOARD_SIZE as usize]; BOARD_SIZE as usize];

#[inline]
fn cell(grid_pos: Position) -> (usize, usize) {
    (grid_pos.x as usize, grid_pos.z as usize)
}

/// Check if any unwalled path leads from `start` to `goal_row`
pub fn has_path_to_row(start: Position, goal_row: Coord, walls: &[Wall]) -> bool {
    if !is_on_board(start) {
        return false;
    }

    let mut visited: CellGrid<bool> = Default::default();
    let mut frontier = VecDeque::from([start]);
    let (sx, sz) = cell(start);
    visited[sx][sz] = true;

    while let Some(current) = frontier.pop_front() {
        if current.z == goal_row {
            return true;
        }
        for next in open_neighbours(walls, current) {
            let (nx, nz) = cell(next);
            if !visited[nx][nz] {
                visited[nx][nz] = true;
                frontier.push_back(next);
            }
        }
    }

    false
}

/// Shortest unwalled path from `start` to any cell of `goal_row`
///
/// The returned path excludes `start` and ends on the goal row, so its length
/// is the number of steps. Returns `None` when the goal is unreachable or the
/// iteration cap is hit.
pub fn shortest_path(start: Position, goal_row: Coord, walls: &[Wall]) -> Option<Vec<Position>> {
    if !is_on_board(start) {
        return None;
    }

    let mut parent: CellGrid<Option<Position>> = Default::default();
    let mut visited: CellGrid<bool> = Default::default();
    let mut frontier = VecDeque::from([start]);
    let (sx, sz) = cell(start);
    visited[sx][sz] = true;
    let mut iterations = 0usize;

    while let Some(current) = frontier.pop_front() {
        iterations += 1;
        if iterations > BFS_ITERATION_CAP {
            tracing::warn!(
                "[PATH] BFS iteration cap hit from {} toward row {}",
                start,
                goal_row
            );
            return None;
        }

        if current.z == goal_row {
            let mut path = Vec::new();
            let mut step = current;
            while step != start {
                path.push(step);
                let (x, z) = cell(step);
                step = parent[x][z]?;
            }
            path.reverse();
            return Some(path);
        }

        for next in open_neighbours(walls, current) {
            let (nx, nz) = cell(next);
            if !visited[nx][nz] {
                visited[nx][nz] = true;
                parent[nx][nz] = Some(current);
                frontier.push_back(next);
            }
        }
    }

    None
}

/// Straight-column approximation of a path to the goal row
///
/// Used when BFS gives up; keeps evaluation total and bounded.
pub fn synthetic_path(start: Position, goal_row: Coord) -> Vec<Position> {
    let step = if goal_row >= start.z { 1 } else { -1 };
    let mut path = Vec::new();
    let mut z = start.z;
    while z != goal_row {
        z += step;
        path.push(Position::new(start.x, z));
    }
    path
}

/// Shortest path from `start`, or the straight-column approximation
pub fn path_or_synthetic(start: Position, goal_row: Coord, walls: &[Wall]) -> Vec<Position> {
    shortest_path(start, goal_row, walls).unwrap_or_else(|| synthetic_path(start, goal_row))
}

/// Path from a player's pawn to their goal row under the given walls
///
/// Falls back to [`synthetic_path`] when no real path is found.
pub fn path_to_goal(state: &GameState, player: PlayerIndex, walls: &[Wall]) -> Vec<Position> {
    path_or_synthetic(state.position_of(player), goal_row(player), walls)
}

/// Number of steps from a player's pawn to their goal row
#[inline]
pub fn shortest_path_length(state: &GameState, player: PlayerIndex) -> i32 {
    path_to_goal(state, player, &state.walls).len() as i32
}

/// Row-distance proxy for path length
#[inline]
pub fn distance_to_goal(state: &GameState, player: PlayerIndex) -> i32 {
    state.row_distance(player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_board_path_is_straight() {
        let path = shortest_path(Position::new(4, 0), 8, &[]).unwrap();
        assert_eq!(path.len(), 8);
        assert_eq!(path.last().unwrap().z, 8);
    }

    #[test]
    fn test_start_on_goal_row_is_empty_path() {
        let path = shortest_path(Position::new(2, 8), 8, &[]).unwrap();
        assert!(path.is_empty());
        assert!(has_path_to_row(Position::new(2, 8), 8, &[]));
    }

    #[test]
    fn test_path_detours_around_wall() {
        //! A wall directly ahead forces a sideways detour of one extra step
        let walls = [Wall::horizontal(3, 0)];
        let path = shortest_path(Position::new(4, 0), 8, &walls).unwrap();
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn test_sealed_region_has_no_path() {
        //! Row boundary 3|4 is sealed in columns 0..=7; column 8 is cut off
        //! below row 2 and beside rows 2-3, leaving a pocket that still escapes
        let walls = [
            Wall::horizontal(0, 3),
            Wall::horizontal(2, 3),
            Wall::horizontal(4, 3),
            Wall::horizontal(6, 3),
            Wall::vertical(7, 2),
            Wall::horizontal(7, 1),
        ];
        assert!(!has_path_to_row(Position::new(0, 0), 8, &walls));
        assert!(shortest_path(Position::new(0, 0), 8, &walls).is_none());

        // The pocket at column 8 rows 2-3 opens upward
        assert!(has_path_to_row(Position::new(8, 3), 8, &walls));
        // The seal works both ways: player 1 cannot get down past it either
        assert!(!has_path_to_row(Position::new(4, 8), 0, &walls));
    }

    #[test]
    fn test_row_distance_ignores_walls() {
        let mut state = crate::api::create_initial_state();
        state.walls = vec![Wall::horizontal(3, 0), Wall::horizontal(5, 0)];
        state.wall_owners = vec![1, 1];
        assert_eq!(distance_to_goal(&state, 0), 8);
        assert_eq!(distance_to_goal(&state, 1), 8);
        assert!(shortest_path_length(&state, 0) > 8);
    }

    #[test]
    fn test_synthetic_path_runs_straight_down_the_column() {
        let path = synthetic_path(Position::new(6, 5), 0);
        assert_eq!(path.len(), 5);
        assert!(path.iter().all(|p| p.x == 6));
        assert_eq!(path.last(), Some(&Position::new(6, 0)));
    }
}
