//! Quoridor Engine Benchmarks
//!
//! Performance benchmarks for critical engine functions using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quoridor_engine::ai::Ai;
use quoridor_engine::api::{apply_wall, create_initial_state};
use quoridor_engine::evaluation::evaluate_position;
use quoridor_engine::move_gen::get_valid_moves;
use quoridor_engine::types::{Difficulty, GameState, Orientation, Wall};
use quoridor_engine::wall_gen::{all_valid_walls, is_valid_wall_placement};

/// A position with a few walls down so BFS has detours to find
fn walled_state() -> GameState {
    let state = create_initial_state();
    let state = apply_wall(3, 3, Orientation::Horizontal, &state);
    let state = apply_wall(5, 4, Orientation::Horizontal, &state);
    let state = apply_wall(2, 5, Orientation::Vertical, &state);
    apply_wall(6, 2, Orientation::Vertical, &state)
}

fn bench_move_generation(c: &mut Criterion) {
    let state = walled_state();

    c.bench_function("get_valid_moves", |b| {
        b.iter(|| black_box(get_valid_moves(0, &state)))
    });
}

fn bench_wall_validation(c: &mut Criterion) {
    let state = walled_state();
    let wall = Wall::horizontal(4, 6);

    c.bench_function("is_valid_wall_placement", |b| {
        b.iter(|| black_box(is_valid_wall_placement(&wall, &state)))
    });
}

fn bench_all_valid_walls(c: &mut Criterion) {
    let state = walled_state();

    c.bench_function("all_valid_walls", |b| {
        b.iter(|| black_box(all_valid_walls(&state).len()))
    });
}

fn bench_evaluate_position(c: &mut Criterion) {
    let state = walled_state();

    c.bench_function("evaluate_position", |b| {
        b.iter(|| black_box(evaluate_position(&state, 0)))
    });
}

fn bench_ai_decisions(c: &mut Criterion) {
    let state = walled_state();

    for difficulty in Difficulty::ALL {
        let mut ai = Ai::with_seed(state.current_player, difficulty, 7);
        c.bench_function(&format!("ai_decide_{}", difficulty), |b| {
            b.iter(|| black_box(ai.decide(&state)))
        });
    }
}

criterion_group!(
    benches,
    bench_move_generation,
    bench_wall_validation,
    bench_all_valid_walls,
    bench_evaluate_position,
    bench_ai_decisions,
);
criterion_main!(benches);
