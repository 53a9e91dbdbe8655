//! Turn driver for one game
//!
//! A [`GameSession`] owns the current state and the two seats. Human seats
//! act through [`GameSession::submit_action`]; AI seats act through
//! [`GameSession::play_ai_turn`]. Both routes go through the engine's
//! `apply_action`, so the session never builds a state the engine did not.
//!
//! # Stuck Recovery
//!
//! When an AI reports that it has no legal action, the session surfaces it
//! as [`TurnOutcome::Stuck`] and forces the turn over to the other player.
//! That is the only way a turn passes without an action.

use crate::core::config::{MatchConfig, SeatConfig};
use crate::game::error::{GameError, GameResult};
use quoridor_engine::ai::Ai;
use quoridor_engine::api::{apply_action, create_initial_state, force_turn_change, ActionOutcome};
use quoridor_engine::constants::PLAYER_COUNT;
use quoridor_engine::types::{Action, GameState, PlayerIndex};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// Controller of one seat
#[derive(Debug, Clone)]
pub enum Seat {
    Human,
    Ai(Ai),
}

impl Seat {
    /// Build a seat from its config, seeding AI seats when a seed is given
    pub fn from_config(config: SeatConfig, player: PlayerIndex, seed: Option<u64>) -> Self {
        match config {
            SeatConfig::Human => Seat::Human,
            SeatConfig::Ai { difficulty } => Seat::Ai(match seed {
                Some(seed) => Ai::with_seed(player, difficulty, seed),
                None => Ai::new(player, difficulty),
            }),
        }
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, Seat::Ai(_))
    }
}

/// What happened on one call to `submit_action` or `play_ai_turn`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The action was legal and the game moved on
    Applied { player: PlayerIndex, action: Action },
    /// The action was illegal; the state is unchanged and the same player is still to move
    Rejected { player: PlayerIndex, action: Action },
    /// The AI found no legal action; the turn was forced over
    Stuck { player: PlayerIndex },
}

/// Summary of a finished (or abandoned) game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// `None` when the turn limit was reached first
    pub winner: Option<PlayerIndex>,
    pub turns: usize,
    pub walls_placed: [usize; PLAYER_COUNT],
    pub stuck_recoveries: usize,
    /// AI decisions that came from the emergency fallback
    pub fallbacks: usize,
}

impl MatchOutcome {
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// One game in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    seats: [Seat; PLAYER_COUNT],
    max_turns: usize,
    turns: usize,
    history: Vec<Action>,
    stuck_recoveries: usize,
    fallbacks: usize,
}

impl GameSession {
    pub fn new(seats: [Seat; PLAYER_COUNT], max_turns: usize) -> Self {
        GameSession {
            state: create_initial_state(),
            seats,
            max_turns,
            turns: 0,
            history: Vec::new(),
            stuck_recoveries: 0,
            fallbacks: 0,
        }
    }

    /// Session for game `game_index` of a configured match
    pub fn from_config(config: &MatchConfig, game_index: usize) -> Self {
        let seats = [0, 1].map(|player| {
            Seat::from_config(
                config.seats[player],
                player,
                config.seat_seed(game_index, player),
            )
        });
        Self::new(seats, config.max_turns)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seat(&self, player: PlayerIndex) -> &Seat {
        &self.seats[player]
    }

    /// Turns taken so far, forced turn changes included
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Applied actions in order
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// True when the player to move is AI-controlled
    pub fn ai_to_move(&self) -> bool {
        self.seats[self.state.current_player].is_ai()
    }

    fn ensure_playable(&self) -> GameResult<()> {
        if let Some(winner) = self.state.winner {
            return Err(GameError::GameFinished { winner });
        }
        if self.turns >= self.max_turns {
            return Err(GameError::TurnLimitExceeded {
                limit: self.max_turns,
            });
        }
        Ok(())
    }

    fn commit(&mut self, player: PlayerIndex, action: Action) -> TurnOutcome {
        match apply_action(&self.state, &action) {
            ActionOutcome::Applied(next) => {
                self.state = next;
                self.turns += 1;
                self.history.push(action);
                debug!("[SESSION] Turn {}: player {} {}", self.turns, player, action);
                if let Some(winner) = self.state.winner {
                    info!(
                        "[SESSION] Player {} wins after {} turns",
                        winner, self.turns
                    );
                }
                TurnOutcome::Applied { player, action }
            }
            ActionOutcome::Rejected => {
                debug!("[SESSION] Rejected {} from player {}", action, player);
                TurnOutcome::Rejected { player, action }
            }
        }
    }

    fn recover_stuck(&mut self, player: PlayerIndex) -> TurnOutcome {
        self.state = force_turn_change(&self.state);
        self.turns += 1;
        self.stuck_recoveries += 1;
        warn!(
            "[SESSION] Player {} is stuck; forcing the turn to player {}",
            player, self.state.current_player
        );
        TurnOutcome::Stuck { player }
    }

    /// Apply an externally supplied action for the human seat to move
    ///
    /// An illegal action is reported as [`TurnOutcome::Rejected`], not as an error.
    pub fn submit_action(&mut self, action: Action) -> GameResult<TurnOutcome> {
        self.ensure_playable()?;
        let player = self.state.current_player;
        if self.seats[player].is_ai() {
            return Err(GameError::NotHumanTurn { player });
        }
        Ok(self.commit(player, action))
    }

    /// Let the AI seat to move take its turn
    pub fn play_ai_turn(&mut self) -> GameResult<TurnOutcome> {
        self.ensure_playable()?;
        let player = self.state.current_player;
        let Seat::Ai(ai) = &mut self.seats[player] else {
            return Err(GameError::NotAiTurn { player });
        };

        let decision = ai.decide(&self.state);
        if ai.last_statistics().used_fallback() {
            self.fallbacks += 1;
        }

        match decision {
            Some(action) => match self.commit(player, action) {
                TurnOutcome::Rejected { .. } => {
                    error!(
                        "[SESSION] AI decision {} for player {} was rejected",
                        action, player
                    );
                    Ok(self.recover_stuck(player))
                }
                outcome => Ok(outcome),
            },
            None => Ok(self.recover_stuck(player)),
        }
    }

    /// Play AI turns until the game ends or the turn limit is hit
    ///
    /// Returns [`GameError::NotAiTurn`] if a human seat comes up.
    pub fn run_to_completion(&mut self) -> GameResult<MatchOutcome> {
        loop {
            match self.play_ai_turn() {
                Ok(_) => continue,
                Err(GameError::GameFinished { .. }) => break,
                Err(GameError::TurnLimitExceeded { limit }) => {
                    info!("[SESSION] Turn limit {} reached, game drawn", limit);
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(self.outcome())
    }

    /// Summary of the game so far
    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome {
            winner: self.state.winner,
            turns: self.turns,
            walls_placed: [0, 1].map(|player| self.state.walls_placed_by(player)),
            stuck_recoveries: self.stuck_recoveries,
            fallbacks: self.fallbacks,
        }
    }
}
