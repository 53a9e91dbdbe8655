//! Action generation and ordering for alpha-beta pruning
//!
//! A full Quoridor node has over a hundred legal walls, so search nodes only
//! look at a bounded candidate set: every legal pawn move, the walls that cut
//! the first steps of the opponent's shortest path, and a few random walls.
//! Candidates are sorted best-first by the same heuristics the greedy tiers
//! use, which lets the pruning window close early.

use crate::constants::*;
use crate::evaluation::{evaluate_move, evaluate_wall};
use crate::move_gen::get_valid_moves;
use crate::types::*;
use crate::wall_gen::{path_cutting_walls, sample_valid_walls};
use rand::Rng;

/// Generate the ordered candidate actions for the player to move
///
/// Every returned action is legal in `state`. Returns an empty list once the
/// game is finished.
pub fn generate_actions<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Vec<Action> {
    if state.is_finished() {
        return Vec::new();
    }

    let mover = state.current_player;
    let mut scored: Vec<(i32, Action)> = get_valid_moves(mover, state)
        .into_iter()
        .map(|to| (evaluate_move(to, state), Action::Move(to)))
        .collect();

    let mut walls = path_cutting_walls(state, opponent(mover), PATH_WALK_STEPS);
    walls.truncate(SEARCH_PATH_WALLS);
    for wall in sample_valid_walls(state, SEARCH_RANDOM_WALLS, WALL_SAMPLE_ATTEMPTS, rng) {
        if !walls.contains(&wall) {
            walls.push(wall);
        }
    }
    scored.extend(
        walls
            .into_iter()
            .map(|wall| (evaluate_wall(&wall, state), Action::Wall(wall))),
    );

    // Stable sort keeps moves ahead of equally scored walls
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, action)| action).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{create_initial_state, is_legal_action};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_actions_are_legal_and_bounded() {
        let state = create_initial_state();
        let mut rng = StdRng::seed_from_u64(11);
        let actions = generate_actions(&state, &mut rng);

        let moves = actions
            .iter()
            .filter(|a| matches!(a, Action::Move(_)))
            .count();
        let walls = actions.len() - moves;
        assert_eq!(moves, 3);
        assert!(walls >= 1 && walls <= SEARCH_PATH_WALLS + SEARCH_RANDOM_WALLS);
        assert!(actions.iter().all(|a| is_legal_action(&state, a)));
    }

    #[test]
    fn test_forward_move_is_ordered_first() {
        //! Stepping toward goal shortens the path and outranks every opening wall
        let state = create_initial_state();
        let mut rng = StdRng::seed_from_u64(2);
        let actions = generate_actions(&state, &mut rng);
        assert_eq!(actions[0], Action::Move(Position::new(4, 1)));
    }

    #[test]
    fn test_no_walls_in_hand_means_moves_only() {
        let mut state = create_initial_state();
        state.players[0].walls_left = 0;
        let mut rng = StdRng::seed_from_u64(4);
        let actions = generate_actions(&state, &mut rng);
        assert!(actions.iter().all(|a| matches!(a, Action::Move(_))));
    }
}
