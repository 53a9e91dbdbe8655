//! Difficulty tier strategies
//!
//! | Tier   | Moves when        | Wall choice                                    |
//! |--------|-------------------|------------------------------------------------|
//! | Easy   | 80% of turns      | random pick from a small valid sample          |
//! | Medium | 60% of turns      | best cutting or sampled wall, if it scores > 0 |
//! | Hard   | search decides    | 2-ply alpha-beta over moves and capped walls   |
//!
//! Pawn moves are always the greedy best by [`evaluate_move`]. A tier may
//! return an error; [`crate::ai::Ai::decide`] turns that into a fallback.

use super::stats::AiStatistics;
use crate::constants::*;
use crate::error::{QuoridorEngineError, QuoridorEngineResult};
use crate::evaluation::{evaluate_move, evaluate_wall};
use crate::move_gen::get_valid_moves;
use crate::search::find_best_action;
use crate::types::*;
use crate::wall_gen::{path_cutting_walls, sample_valid_walls};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Run the strategy for `difficulty` on behalf of the player to move
pub(super) fn choose_action<R: Rng + ?Sized>(
    difficulty: Difficulty,
    state: &GameState,
    rng: &mut R,
    stats: &mut AiStatistics,
) -> QuoridorEngineResult<Action> {
    match difficulty {
        Difficulty::Easy => easy(state, rng, stats),
        Difficulty::Medium => medium(state, rng, stats),
        Difficulty::Hard => hard(state, rng, stats),
    }
}

/// Highest scoring legal pawn move
fn greedy_move(state: &GameState, stats: &mut AiStatistics) -> QuoridorEngineResult<Action> {
    let best = get_valid_moves(state.current_player, state)
        .into_iter()
        .map(|to| (evaluate_move(to, state), to))
        .max_by_key(|&(score, _)| score);

    match best {
        Some((score, to)) => {
            stats.score = Some(score);
            Ok(Action::Move(to))
        }
        None => Err(QuoridorEngineError::NoCandidateActions {
            player: state.current_player,
        }),
    }
}

fn easy<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
    stats: &mut AiStatistics,
) -> QuoridorEngineResult<Action> {
    if rng.random_bool(EASY_MOVE_PROBABILITY) {
        return greedy_move(state, stats);
    }

    let sample = sample_valid_walls(state, EASY_WALL_SAMPLE, WALL_SAMPLE_ATTEMPTS, rng);
    match sample.choose(rng) {
        Some(&wall) => Ok(Action::Wall(wall)),
        None => greedy_move(state, stats),
    }
}

/// Path-cutting walls first, then a random sample of other legal walls
fn medium_wall_candidates<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Vec<Wall> {
    let mut candidates =
        path_cutting_walls(state, opponent(state.current_player), PATH_WALK_STEPS);
    for wall in sample_valid_walls(state, MEDIUM_WALL_SAMPLE, WALL_SAMPLE_ATTEMPTS, rng) {
        if !candidates.contains(&wall) {
            candidates.push(wall);
        }
    }
    candidates
}

fn medium<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
    stats: &mut AiStatistics,
) -> QuoridorEngineResult<Action> {
    if rng.random_bool(MEDIUM_MOVE_PROBABILITY) {
        return greedy_move(state, stats);
    }

    let best = medium_wall_candidates(state, rng)
        .into_iter()
        .map(|wall| (evaluate_wall(&wall, state), wall))
        .max_by_key(|&(score, _)| score);

    match best {
        Some((score, wall)) if score > 0 => {
            stats.score = Some(score);
            Ok(Action::Wall(wall))
        }
        _ => greedy_move(state, stats),
    }
}

fn hard<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
    stats: &mut AiStatistics,
) -> QuoridorEngineResult<Action> {
    let result = find_best_action(state, SEARCH_DEPTH, rng)?;
    stats.nodes = result.stats.nodes;
    stats.cutoffs = result.stats.cutoffs;
    stats.score = Some(result.score);
    Ok(result.action)
}
