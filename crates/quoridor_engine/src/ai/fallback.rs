//! Emergency fallback
//!
//! Substitutes for a failed tier: a uniformly random legal move, else a
//! random legal wall found by bounded sampling, else nothing. Nothing here
//! consults a heuristic, so it cannot fail the way a tier can.

use crate::constants::FALLBACK_WALL_ATTEMPTS;
use crate::move_gen::get_valid_moves;
use crate::types::*;
use crate::wall_gen::sample_valid_walls;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick any legal action for the player to move
///
/// Returns `None` only when the player has neither a legal move nor a wall
/// that sampling could find.
pub fn emergency_action<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Option<Action> {
    let moves = get_valid_moves(state.current_player, state);
    if let Some(&to) = moves.choose(rng) {
        return Some(Action::Move(to));
    }

    sample_valid_walls(state, 1, FALLBACK_WALL_ATTEMPTS, rng)
        .first()
        .map(|&wall| Action::Wall(wall))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{create_initial_state, is_legal_action};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fallback_prefers_a_legal_move() {
        let state = create_initial_state();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..20 {
            let action = emergency_action(&state, &mut rng).unwrap();
            assert!(matches!(action, Action::Move(_)));
            assert!(is_legal_action(&state, &action));
        }
    }

    #[test]
    fn test_fallback_gives_up_when_boxed_in() {
        //! A hand-built corner box: no move, and no wall keeps both goals reachable
        let mut state = create_initial_state();
        state.players[0].position = Position::new(0, 0);
        state.walls = vec![Wall::horizontal(0, 0), Wall::vertical(0, 0)];
        state.wall_owners = vec![1, 1];
        let mut rng = StdRng::seed_from_u64(3);
        assert!(get_valid_moves(0, &state).is_empty());
        assert_eq!(emergency_action(&state, &mut rng), None);
    }
}
