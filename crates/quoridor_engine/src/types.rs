//! # Quoridor Engine Core Types
//!
//! ## Overview
//!
//! This module defines the plain-data records every other module works with:
//!
//! 1. [`Position`] - a board cell `(x, z)`
//! 2. [`Wall`] - a wall slot `(x, z)` plus its [`Orientation`]
//! 3. [`Player`] - a pawn position and the walls still in hand
//! 4. [`GameState`] - both players, whose turn it is, the placed walls, the winner
//! 5. [`Action`] - what a player does on their turn: move the pawn or place a wall
//! 6. [`Difficulty`] - which AI tier plays a seat
//!
//! ## Immutability by Convention
//!
//! A published `GameState` is never edited in place. Every transition in
//! [`crate::api`] borrows the current state and returns a freshly built one,
//! so older states stay valid for anyone still holding them (history views,
//! search trees, concurrent readers).
//!
//! ## Wire Shape
//!
//! All records derive serde. `Action` serializes with an internal `type` tag,
//! which gives the rendering layer exactly the shapes it expects:
//!
//! ```json
//! {"type": "move", "x": 4, "z": 1}
//! {"type": "wall", "x": 3, "z": 5, "orientation": "horizontal"}
//! ```

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index into the players array: 0 or 1
pub type PlayerIndex = usize;

/// Row or column coordinate
pub type Coord = i8;

/// The other player
#[inline]
pub fn opponent(player: PlayerIndex) -> PlayerIndex {
    debug_assert!(player < PLAYER_COUNT, "player index {player} out of range");
    player ^ 1
}

/// Row a player must reach to win
#[inline]
pub fn goal_row(player: PlayerIndex) -> Coord {
    GOAL_ROWS[player]
}

/// A board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: Coord,
    pub z: Coord,
}

impl Position {
    pub const fn new(x: Coord, z: Coord) -> Self {
        Position { x, z }
    }

    /// Cell reached by stepping `(dx, dz)`; may lie off the board.
    #[inline]
    pub fn offset(self, (dx, dz): (i8, i8)) -> Position {
        Position::new(self.x + dx, self.z + dz)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Wall orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Runs along a row boundary, blocks vertical steps
    Horizontal,
    /// Runs along a column boundary, blocks horizontal steps
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// A wall anchored on a slot of the 8x8 wall grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub x: Coord,
    pub z: Coord,
    pub orientation: Orientation,
}

impl Wall {
    pub const fn new(x: Coord, z: Coord, orientation: Orientation) -> Self {
        Wall { x, z, orientation }
    }

    pub const fn horizontal(x: Coord, z: Coord) -> Self {
        Wall::new(x, z, Orientation::Horizontal)
    }

    pub const fn vertical(x: Coord, z: Coord) -> Self {
        Wall::new(x, z, Orientation::Vertical)
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wall at ({}, {})", self.orientation, self.x, self.z)
    }
}

/// One pawn and its remaining walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub walls_left: u8,
}

/// Complete game state
///
/// `walls` is in placement order; `wall_owners[i]` is the player who placed
/// `walls[i]`. Both vectors always have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: [Player; PLAYER_COUNT],
    pub current_player: PlayerIndex,
    pub walls: Vec<Wall>,
    pub wall_owners: Vec<PlayerIndex>,
    pub winner: Option<PlayerIndex>,
}

impl GameState {
    /// Player record by index
    #[inline]
    pub fn player(&self, index: PlayerIndex) -> &Player {
        &self.players[index]
    }

    /// Position of a player's pawn
    #[inline]
    pub fn position_of(&self, index: PlayerIndex) -> Position {
        self.players[index].position
    }

    /// True once a winner has been recorded
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Number of walls a player has placed so far
    pub fn walls_placed_by(&self, index: PlayerIndex) -> usize {
        self.wall_owners.iter().filter(|&&owner| owner == index).count()
    }

    /// Row distance from a player's pawn to their goal row
    #[inline]
    pub fn row_distance(&self, index: PlayerIndex) -> i32 {
        (self.position_of(index).z as i32 - goal_row(index) as i32).abs()
    }
}

/// A turn: move the pawn or place a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    Move(Position),
    Wall(Wall),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(to) => write!(f, "move to {}", to),
            Action::Wall(wall) => write!(f, "place {}", wall),
        }
    }
}

/// AI difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Greedy mover that occasionally drops a random wall
    Easy,
    /// Greedy mover that cuts the opponent's path when it pays off
    #[default]
    Medium,
    /// Two-ply minimax with alpha-beta pruning
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a difficulty name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}
