//! Pawn move generation
//!
//! Enumerates the exact set of legal destination cells for a pawn:
//!
//! - **Orthogonal steps** onto free, unwalled neighbours
//! - **Straight jumps** over an orthogonally adjacent opponent
//! - **Diagonal jumps** beside the opponent, only when the straight jump is
//!   walled off or would leave the board
//!
//! A jump never crosses a wall between the mover and the opponent: the first
//! leg of every jump is the same unwalled step an ordinary move would need.

use crate::board::*;
use crate::constants::*;
use crate::types::*;

/// Directions perpendicular to `dir`
#[inline]
fn perpendicular((dx, dz): (i8, i8)) -> [(i8, i8); 2] {
    [(dz, dx), (-dz, -dx)]
}

/// Generate all legal destinations for a player's pawn
///
/// Returns an empty list once the game is finished. The result contains no
/// duplicates.
pub fn get_valid_moves(player: PlayerIndex, state: &GameState) -> Vec<Position> {
    if state.is_finished() {
        return Vec::new();
    }

    let from = state.position_of(player);
    let occupied = state.position_of(opponent(player));
    let walls = &state.walls;
    let mut moves = Vec::with_capacity(5);

    for &dir in &DIRECTIONS {
        let step = from.offset(dir);
        if !can_step(walls, from, step) {
            continue;
        }

        if step != occupied {
            moves.push(step);
            continue;
        }

        let jump = occupied.offset(dir);
        if can_step(walls, occupied, jump) {
            moves.push(jump);
            continue;
        }

        for side in perpendicular(dir) {
            let diagonal = occupied.offset(side);
            if can_step(walls, occupied, diagonal) {
                moves.push(diagonal);
            }
        }
    }

    moves
}

/// Check if a destination is legal for a player's pawn
pub fn is_valid_move(player: PlayerIndex, to: Position, state: &GameState) -> bool {
    get_valid_moves(player, state).contains(&to)
}
