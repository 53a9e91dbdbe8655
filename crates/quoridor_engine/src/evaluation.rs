//! Heuristic evaluation
//!
//! Scores used by every AI tier:
//! - Candidate pawn moves (progress along the shortest path)
//! - Candidate walls (how much longer they make each player's path)
//! - Search leaves (path, row and wall-supply differentials)
//!
//! All scores are "positive is better" for the player they are computed for.
//!
//! ## Module Organization
//!
//! - `moves` - Move scoring for the player to move
//! - `walls` - Wall scoring for the player to move
//! - `position` - Leaf evaluation from a fixed player's point of view

mod moves;
mod position;
mod walls;

pub use moves::evaluate_move;
pub use position::evaluate_position;
pub use walls::evaluate_wall;
