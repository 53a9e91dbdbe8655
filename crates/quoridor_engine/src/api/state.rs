//! Game status queries

use crate::types::*;
use serde::{Deserialize, Serialize};

/// Coarse game status: still being played, or won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress { current_player: PlayerIndex },
    Finished { winner: PlayerIndex },
}

/// Get current game status
pub fn game_status(state: &GameState) -> GameStatus {
    match state.winner {
        Some(winner) => GameStatus::Finished { winner },
        None => GameStatus::InProgress {
            current_player: state.current_player,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{apply_move, create_initial_state};

    #[test]
    fn test_status_follows_winner() {
        let state = create_initial_state();
        assert_eq!(
            game_status(&state),
            GameStatus::InProgress { current_player: 0 }
        );

        let mut near_goal = state.clone();
        near_goal.players[1].position = Position::new(0, 1);
        near_goal.current_player = 1;
        let won = apply_move(0, 0, &near_goal);
        assert_eq!(game_status(&won), GameStatus::Finished { winner: 1 });
    }
}
