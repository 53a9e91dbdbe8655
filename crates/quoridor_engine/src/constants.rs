//! # Quoridor Engine Constants - Board Dimensions, Scores & Search Parameters
//!
//! ## Overview
//!
//! This module centralizes the constant values used throughout the engine: board
//! geometry, the wall budget per player, the reachability search cap, the score
//! scale used by the move/wall heuristics and the alpha-beta search, and the
//! per-tier tuning knobs of the AI opponent.
//!
//! ## Coordinate System
//!
//! Cells are addressed as `(x, z)` with `0 <= x, z <= 8`. Player 0 starts on
//! `(4, 0)` and races to row `z = 8`; player 1 starts on `(4, 8)` and races to
//! row `z = 0`.
//!
//! Walls live on a secondary 8x8 grid of slots (`0..=7` on both axes). A slot
//! `(x, z)` names the grid point between cells `(x, z)` and `(x + 1, z + 1)`:
//!
//! - a **horizontal** wall on that slot sits between rows `z` and `z + 1` and
//!   covers columns `x` and `x + 1`
//! - a **vertical** wall on that slot sits between columns `x` and `x + 1` and
//!   covers rows `z` and `z + 1`
//!
//! ## Score Scale
//!
//! Leaf evaluation works in "path steps x 100". A single step of shortest-path
//! advantage is worth [`PATH_WEIGHT`]; a won position is worth [`WIN_SCORE`],
//! far above anything a heuristic sum can reach, so search never trades a win
//! for positional gain.
//!
//! ## Further Reading
//!
//! - **Quoridor rules**: https://en.wikipedia.org/wiki/Quoridor
//! - **Alpha-Beta Search**: https://www.chessprogramming.org/Alpha-Beta

/// Cells per side of the board.
pub const BOARD_SIZE: i8 = 9;

/// Highest valid cell coordinate on either axis.
pub const MAX_CELL: i8 = BOARD_SIZE - 1;

/// Highest valid wall-slot coordinate on either axis.
pub const MAX_WALL_SLOT: i8 = BOARD_SIZE - 2;

/// Number of wall slots per axis.
pub const WALL_SLOTS_PER_AXIS: i8 = BOARD_SIZE - 1;

/// Walls each player starts with.
pub const WALLS_PER_PLAYER: u8 = 10;

/// Number of players.
pub const PLAYER_COUNT: usize = 2;

/// Starting cells, indexed by player.
pub const START_POSITIONS: [(i8, i8); PLAYER_COUNT] = [(4, 0), (4, MAX_CELL)];

/// Goal rows, indexed by player.
pub const GOAL_ROWS: [i8; PLAYER_COUNT] = [MAX_CELL, 0];

/// Orthogonal step directions `(dx, dz)`.
pub const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Upper bound on BFS dequeues for shortest-path queries.
///
/// The board only has 81 cells, so a sound traversal never hits this. It keeps
/// path evaluation total against inconsistent input.
pub const BFS_ITERATION_CAP: usize = 1_000;

// =============================================================================
// Evaluation weights
// =============================================================================

/// Score assigned to a won (or lost, negated) leaf.
pub const WIN_SCORE: i32 = 100_000;

/// Score returned by `evaluate_wall` for a wall that would cut a player off.
pub const REJECTED_WALL_SCORE: i32 = -100_000;

/// Bonus for a move that lands on the goal row.
pub const GOAL_MOVE_BONUS: i32 = 1_000;

/// Weight of one step of shortest-path improvement when scoring moves.
pub const MOVE_PATH_WEIGHT: i32 = 10;

/// Bonus for a move that leaves the mover strictly closer to goal than the opponent.
pub const MOVE_LEAD_BONUS: i32 = 5;

/// Bonus (or penalty, negated) for a move that changes row distance to goal.
pub const MOVE_DIRECTION_BONUS: i32 = 3;

/// Weight of one step of net path-length swing when scoring walls.
pub const WALL_PATH_WEIGHT: i32 = 10;

/// Bonus for a wall that lengthens an opponent who is close to goal.
pub const WALL_INTERDICTION_BONUS: i32 = 20;

/// Row distance at or below which the opponent counts as close to goal.
pub const INTERDICTION_ROW_DISTANCE: i32 = 2;

/// Penalty for spending a wall from a short supply.
pub const WALL_SCARCITY_PENALTY: i32 = 8;

/// Walls left at or below which [`WALL_SCARCITY_PENALTY`] applies.
pub const WALL_SCARCITY_THRESHOLD: u8 = 2;

/// Flat cost of spending any wall.
pub const WALL_BASE_COST: i32 = 1;

/// Leaf weight of one step of shortest-path differential.
pub const PATH_WEIGHT: i32 = 100;

/// Leaf weight of one row of row-distance differential.
pub const ROW_WEIGHT: i32 = 10;

/// Leaf weight of one wall of remaining-wall differential.
pub const WALLS_LEFT_WEIGHT: i32 = 5;

/// Alpha-beta window bound.
pub const AB_INF: i32 = i32::MAX / 2;

// =============================================================================
// AI tiers
// =============================================================================

/// Probability that the easy tier moves instead of walling.
pub const EASY_MOVE_PROBABILITY: f64 = 0.8;

/// Probability that the medium tier moves instead of trying a wall.
pub const MEDIUM_MOVE_PROBABILITY: f64 = 0.6;

/// Valid walls the easy tier samples before picking one at random.
pub const EASY_WALL_SAMPLE: usize = 5;

/// Valid walls the medium tier samples when no path-cutting wall exists.
pub const MEDIUM_WALL_SAMPLE: usize = 10;

/// Opponent path steps walked when deriving path-cutting walls.
pub const PATH_WALK_STEPS: usize = 3;

/// Random slots tried while sampling valid walls.
pub const WALL_SAMPLE_ATTEMPTS: usize = 60;

/// Fixed search depth of the hard tier, in plies.
pub const SEARCH_DEPTH: u32 = 2;

/// Cap on path-cutting walls considered per search node.
pub const SEARCH_PATH_WALLS: usize = 6;

/// Cap on randomly sampled walls considered per search node.
pub const SEARCH_RANDOM_WALLS: usize = 4;

/// Random slots tried by the emergency fallback before declaring the AI stuck.
pub const FALLBACK_WALL_ATTEMPTS: usize = 200;
