//! Action execution
//!
//! Functions for applying pawn moves and wall placements. An illegal
//! candidate is not an error: the caller gets back a copy of the state it
//! passed in and is expected to re-render it.

use crate::move_gen::is_valid_move;
use crate::types::*;
use crate::wall_gen::is_valid_wall_placement;
use tracing::trace;

/// Result of [`apply_action`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action was legal; here is the next state
    Applied(GameState),
    /// The action was illegal; the state is unchanged
    Rejected,
}

impl ActionOutcome {
    /// The next state, or the given fallback when rejected
    pub fn into_state_or(self, current: &GameState) -> GameState {
        match self {
            ActionOutcome::Applied(next) => next,
            ActionOutcome::Rejected => current.clone(),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied(_))
    }
}

/// Check if an action is legal for the player to move
pub fn is_legal_action(state: &GameState, action: &Action) -> bool {
    match action {
        Action::Move(to) => is_valid_move(state.current_player, *to, state),
        Action::Wall(wall) => is_valid_wall_placement(wall, state),
    }
}

/// Apply an action for the player to move
///
/// # Examples
///
/// ```rust
/// use quoridor_engine::api::{apply_action, create_initial_state};
/// use quoridor_engine::types::{Action, Position};
///
/// let state = create_initial_state();
/// let outcome = apply_action(&state, &Action::Move(Position::new(4, 1)));
/// assert!(outcome.is_applied());
/// ```
pub fn apply_action(state: &GameState, action: &Action) -> ActionOutcome {
    if !is_legal_action(state, action) {
        trace!(
            "[ENGINE] Rejected {} for player {}",
            action,
            state.current_player
        );
        return ActionOutcome::Rejected;
    }

    let mover = state.current_player;
    let next = match *action {
        Action::Move(to) => {
            let mut players = state.players;
            players[mover].position = to;
            let winner = (to.z == goal_row(mover)).then_some(mover);
            GameState {
                players,
                current_player: opponent(mover),
                walls: state.walls.clone(),
                wall_owners: state.wall_owners.clone(),
                winner,
            }
        }
        Action::Wall(wall) => {
            let mut players = state.players;
            players[mover].walls_left = players[mover].walls_left.saturating_sub(1);
            let mut walls = state.walls.clone();
            walls.push(wall);
            let mut wall_owners = state.wall_owners.clone();
            wall_owners.push(mover);
            GameState {
                players,
                current_player: opponent(mover),
                walls,
                wall_owners,
                winner: None,
            }
        }
    };

    ActionOutcome::Applied(next)
}

/// Move the current player's pawn to `(x, z)`
///
/// Returns the unchanged state if the game is over or the destination is not
/// a legal move. Reaching the goal row records the mover as winner; the turn
/// still passes, but nothing is legal in a finished game.
pub fn apply_move(x: Coord, z: Coord, state: &GameState) -> GameState {
    apply_action(state, &Action::Move(Position::new(x, z))).into_state_or(state)
}

/// Place a wall for the current player
///
/// Returns the unchanged state if the game is over or the wall is illegal.
pub fn apply_wall(x: Coord, z: Coord, orientation: Orientation, state: &GameState) -> GameState {
    apply_action(state, &Action::Wall(Wall::new(x, z, orientation))).into_state_or(state)
}
