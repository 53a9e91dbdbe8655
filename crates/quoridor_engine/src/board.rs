//! Board geometry
//!
//! Pure coordinate predicates used throughout the engine:
//! - Cell and wall-slot bounds checking
//! - Whether a wall blocks the step between two adjacent cells
//!
//! No state lives here; every function is a predicate over its arguments.

use crate::constants::*;
use crate::types::*;

/// Check if cell coordinates are on the board
#[inline]
pub fn is_within_board(x: Coord, z: Coord) -> bool {
    (0..=MAX_CELL).contains(&x) && (0..=MAX_CELL).contains(&z)
}

/// Check if a position is on the board
#[inline]
pub fn is_on_board(pos: Position) -> bool {
    is_within_board(pos.x, pos.z)
}

/// Check if a wall anchors on an interior slot
///
/// Both orientations use the same 0..=7 slot grid on both axes. There is no
/// 1..=8 range on the crossing axis: a horizontal wall at `z` sits between
/// rows `z` and `z + 1`, so `z = 0` is the lowest line and `H(3, 5)` cuts
/// `(4, 5) -> (4, 6)`. A wall never overhangs the board edge along the axis
/// it runs and never sits on the outer edge across it.
#[inline]
pub fn is_wall_slot_within_board(wall: &Wall) -> bool {
    (0..=MAX_WALL_SLOT).contains(&wall.x) && (0..=MAX_WALL_SLOT).contains(&wall.z)
}

/// Check if two cells are orthogonal neighbours
#[inline]
pub fn are_adjacent(a: Position, b: Position) -> bool {
    (a.x - b.x).abs() + (a.z - b.z).abs() == 1
}

/// Check if a single wall blocks the step between two adjacent cells
///
/// A horizontal wall on slot `(x, z)` blocks vertical steps across the line
/// between rows `z` and `z + 1` in columns `x` and `x + 1`. A vertical wall
/// on slot `(x, z)` blocks horizontal steps across the line between columns
/// `x` and `x + 1` in rows `z` and `z + 1`.
pub fn wall_blocks_step(wall: &Wall, from: Position, to: Position) -> bool {
    if !are_adjacent(from, to) {
        return false;
    }

    match wall.orientation {
        Orientation::Horizontal => {
            if from.x != to.x {
                return false;
            }
            let lower_row = from.z.min(to.z);
            wall.z == lower_row && (wall.x == from.x || wall.x == from.x - 1)
        }
        Orientation::Vertical => {
            if from.z != to.z {
                return false;
            }
            let left_col = from.x.min(to.x);
            wall.x == left_col && (wall.z == from.z || wall.z == from.z - 1)
        }
    }
}

/// Check if any wall blocks the step between two adjacent cells
#[inline]
pub fn is_step_blocked(walls: &[Wall], from: Position, to: Position) -> bool {
    walls.iter().any(|wall| wall_blocks_step(wall, from, to))
}

/// Check if a step to a neighbour stays on the board and crosses no wall
#[inline]
pub fn can_step(walls: &[Wall], from: Position, to: Position) -> bool {
    is_on_board(to) && !is_step_blocked(walls, from, to)
}

/// Neighbours reachable by one unwalled orthogonal step, ignoring pawns
pub fn open_neighbours(walls: &[Wall], from: Position) -> impl Iterator<Item = Position> + '_ {
    DIRECTIONS
        .iter()
        .map(move |&dir| from.offset(dir))
        .filter(move |&to| can_step(walls, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_bounds() {
        assert!(is_within_board(0, 0));
        assert!(is_within_board(8, 8));
        assert!(!is_within_board(-1, 4));
        assert!(!is_within_board(4, 9));
    }

    #[test]
    fn test_wall_slot_bounds() {
        //! Slots run 0..=7 on both axes for both orientations
        for orientation in Orientation::ALL {
            assert!(is_wall_slot_within_board(&Wall::new(0, 0, orientation)));
            assert!(is_wall_slot_within_board(&Wall::new(7, 7, orientation)));
            assert!(!is_wall_slot_within_board(&Wall::new(8, 3, orientation)));
            assert!(!is_wall_slot_within_board(&Wall::new(3, 8, orientation)));
            assert!(!is_wall_slot_within_board(&Wall::new(-1, 3, orientation)));
        }
    }

    #[test]
    fn test_lowest_slot_blocks_first_row_boundary() {
        //! Slot 0 across the wall is the line between rows 0 and 1
        let wall = Wall::horizontal(4, 0);
        assert!(is_wall_slot_within_board(&wall));
        assert!(wall_blocks_step(&wall, Position::new(4, 0), Position::new(4, 1)));
        assert!(wall_blocks_step(&wall, Position::new(5, 1), Position::new(5, 0)));

        let wall = Wall::vertical(0, 4);
        assert!(is_wall_slot_within_board(&wall));
        assert!(wall_blocks_step(&wall, Position::new(0, 4), Position::new(1, 4)));
    }

    #[test]
    fn test_horizontal_wall_blocks_both_spanned_columns() {
        let wall = Wall::horizontal(3, 5);
        assert!(wall_blocks_step(&wall, Position::new(3, 5), Position::new(3, 6)));
        assert!(wall_blocks_step(&wall, Position::new(4, 6), Position::new(4, 5)));
        assert!(!wall_blocks_step(&wall, Position::new(5, 5), Position::new(5, 6)));
        assert!(!wall_blocks_step(&wall, Position::new(2, 5), Position::new(2, 6)));
        // Neighbouring row boundaries stay open
        assert!(!wall_blocks_step(&wall, Position::new(4, 4), Position::new(4, 5)));
        // Horizontal steps are never blocked by horizontal walls
        assert!(!wall_blocks_step(&wall, Position::new(3, 5), Position::new(4, 5)));
    }

    #[test]
    fn test_vertical_wall_blocks_both_spanned_rows() {
        let wall = Wall::vertical(2, 0);
        assert!(wall_blocks_step(&wall, Position::new(2, 0), Position::new(3, 0)));
        assert!(wall_blocks_step(&wall, Position::new(3, 1), Position::new(2, 1)));
        assert!(!wall_blocks_step(&wall, Position::new(2, 2), Position::new(3, 2)));
        assert!(!wall_blocks_step(&wall, Position::new(1, 0), Position::new(2, 0)));
        assert!(!wall_blocks_step(&wall, Position::new(2, 0), Position::new(2, 1)));
    }

    #[test]
    fn test_open_neighbours_respects_edges_and_walls() {
        let corner: Vec<_> = open_neighbours(&[], Position::new(0, 0)).collect();
        assert_eq!(corner.len(), 2);

        let walls = [Wall::horizontal(0, 0)];
        let blocked: Vec<_> = open_neighbours(&walls, Position::new(0, 0)).collect();
        assert_eq!(blocked, vec![Position::new(1, 0)]);
    }
}
