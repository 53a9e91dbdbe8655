//! ASCII rendering of a [`GameState`]
//!
//! Row 8 is printed at the top so player 0 climbs up the screen:
//!
//! ```text
//! 8 . . . . 1 . . . .
//!
//! 7 . . . . . . . . .
//!         ---
//! 6 . . . .|. . . . .
//! ...
//!   0 1 2 3 4 5 6 7 8
//! walls left: P0 9, P1 10 | to move: P1
//! ```
//!
//! `|` marks a blocked step between two columns and `-` a blocked step
//! between two rows.

use crate::board::is_step_blocked;
use crate::constants::*;
use crate::types::*;
use std::fmt;

fn cell_glyph(state: &GameState, pos: Position) -> char {
    if state.position_of(0) == pos {
        '0'
    } else if state.position_of(1) == pos {
        '1'
    } else {
        '.'
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in (0..BOARD_SIZE).rev() {
            let mut row = format!("{} ", z);
            for x in 0..BOARD_SIZE {
                let here = Position::new(x, z);
                row.push(cell_glyph(self, here));
                if x < MAX_CELL {
                    let blocked = is_step_blocked(&self.walls, here, Position::new(x + 1, z));
                    row.push(if blocked { '|' } else { ' ' });
                }
            }
            writeln!(f, "{}", row.trim_end())?;

            if z > 0 {
                let mut gap = String::from("  ");
                for x in 0..BOARD_SIZE {
                    let blocked =
                        is_step_blocked(&self.walls, Position::new(x, z - 1), Position::new(x, z));
                    gap.push(if blocked { '-' } else { ' ' });
                    if x < MAX_CELL {
                        // Bridge only the two halves of a wall anchored here
                        let bridged = self.walls.iter().any(|wall| {
                            wall.orientation == Orientation::Horizontal
                                && wall.x == x
                                && wall.z == z - 1
                        });
                        gap.push(if bridged { '-' } else { ' ' });
                    }
                }
                writeln!(f, "{}", gap.trim_end())?;
            }
        }

        let mut footer = String::from(" ");
        for x in 0..BOARD_SIZE {
            footer.push_str(&format!(" {}", x));
        }
        writeln!(f, "{}", footer)?;

        write!(
            f,
            "walls left: P0 {}, P1 {} | ",
            self.players[0].walls_left, self.players[1].walls_left
        )?;
        match self.winner {
            Some(winner) => write!(f, "winner: P{}", winner),
            None => write!(f, "to move: P{}", self.current_player),
        }
    }
}
