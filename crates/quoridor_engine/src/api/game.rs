//! Game lifecycle management
//!
//! Functions for creating a game and for the one out-of-band transition the
//! engine exposes.

use crate::constants::*;
use crate::types::*;

/// Create a new game with both pawns on their start rows
///
/// Player 0 starts on `(4, 0)`, player 1 on `(4, 8)`, ten walls each, no
/// walls placed, player 0 to move.
pub fn create_initial_state() -> GameState {
    let player = |index: PlayerIndex| {
        let (x, z) = START_POSITIONS[index];
        Player {
            position: Position::new(x, z),
            walls_left: WALLS_PER_PLAYER,
        }
    };

    GameState {
        players: [player(0), player(1)],
        current_player: 0,
        walls: Vec::new(),
        wall_owners: Vec::new(),
        winner: None,
    }
}

/// Hand the turn to the other player without an action
///
/// Only meant for recovering from a stuck AI: the caller surfaces the stuck
/// signal and forces the turn over. A finished game is returned unchanged.
pub fn force_turn_change(state: &GameState) -> GameState {
    if state.is_finished() {
        return state.clone();
    }

    GameState {
        current_player: opponent(state.current_player),
        ..state.clone()
    }
}
