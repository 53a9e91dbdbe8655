//! AI opponent
//!
//! An [`Ai`] plays one seat at a fixed [`Difficulty`]. [`Ai::decide`] is the
//! only entry point and it never fails: the tier strategy runs on a private
//! snapshot of the state, behind a panic boundary, and its answer is
//! re-validated before it is returned. When any of that goes wrong the
//! emergency fallback picks a random legal move, then a random legal wall,
//! and only then gives up.
//!
//! On the AI's own turn in a live game, `None` from `decide` therefore means
//! the AI is stuck. Callers surface it and recover with
//! [`crate::api::force_turn_change`].
//!
//! ```rust
//! use quoridor_engine::ai::create_ai;
//! use quoridor_engine::api::{apply_action, create_initial_state};
//! use quoridor_engine::types::Difficulty;
//!
//! let state = create_initial_state();
//! let mut ai = create_ai(0, Difficulty::Easy);
//! let action = ai.decide(&state).expect("fresh board always has a move");
//! assert!(apply_action(&state, &action).is_applied());
//! ```

mod fallback;
mod stats;
mod tiers;

pub use fallback::emergency_action;
pub use stats::{AiStatistics, FallbackReason};

use crate::api::is_legal_action;
use crate::error::{QuoridorEngineError, QuoridorEngineResult};
use crate::types::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error, warn};

/// AI player bound to a seat and a difficulty tier
#[derive(Debug, Clone)]
pub struct Ai {
    player: PlayerIndex,
    difficulty: Difficulty,
    rng: StdRng,
    stats: AiStatistics,
}

/// Create an AI for a seat, seeded from the operating system
pub fn create_ai(player: PlayerIndex, difficulty: Difficulty) -> Ai {
    Ai::new(player, difficulty)
}

impl Ai {
    pub fn new(player: PlayerIndex, difficulty: Difficulty) -> Self {
        Self::with_rng(player, difficulty, StdRng::from_os_rng())
    }

    /// Deterministic AI: the same seed and states give the same decisions
    pub fn with_seed(player: PlayerIndex, difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(player, difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(player: PlayerIndex, difficulty: Difficulty, rng: StdRng) -> Self {
        Ai {
            player,
            difficulty,
            rng,
            stats: AiStatistics::new(difficulty),
        }
    }

    pub fn player(&self) -> PlayerIndex {
        self.player
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Statistics for the most recent decision
    pub fn last_statistics(&self) -> &AiStatistics {
        &self.stats
    }

    /// Choose an action for this AI's seat
    ///
    /// Returns `None` if the game is over, if it is not this seat's turn, or
    /// if no legal action exists at all (the stuck signal).
    pub fn decide(&mut self, state: &GameState) -> Option<Action> {
        let difficulty = self.difficulty;
        self.decide_with(state, |snapshot, rng, stats| {
            tiers::choose_action(difficulty, snapshot, rng, stats)
        })
    }

    /// [`Ai::decide`] with the tier strategy supplied by the caller
    fn decide_with<F>(&mut self, state: &GameState, strategy: F) -> Option<Action>
    where
        F: FnOnce(&GameState, &mut StdRng, &mut AiStatistics) -> QuoridorEngineResult<Action>,
    {
        let snapshot = state.clone();
        self.stats = AiStatistics::new(self.difficulty);

        if snapshot.is_finished() {
            debug!("[AI] Player {} asked to decide on a finished game", self.player);
            return None;
        }
        if snapshot.current_player != self.player {
            warn!(
                "[AI] Player {} asked to decide on player {}'s turn",
                self.player, snapshot.current_player
            );
            return None;
        }

        match self.run_strategy(&snapshot, strategy) {
            Ok(action) => {
                debug!(
                    tier = %self.difficulty,
                    player = self.player,
                    score = ?self.stats.score,
                    "[AI] Chose {}",
                    action
                );
                Some(action)
            }
            Err(err) => {
                let reason = FallbackReason::from(&err);
                warn!(
                    "[AI] {} tier failed for player {} ({}): {} - using emergency fallback",
                    self.difficulty, self.player, reason, err
                );
                self.stats.fallback = Some(reason);
                self.stats.score = None;

                let action = emergency_action(&snapshot, &mut self.rng);
                match action {
                    Some(action) => debug!("[AI] Fallback chose {}", action),
                    None => {
                        self.stats.stuck = true;
                        error!(
                            "[AI] Player {} is stuck: no legal move or wall found",
                            self.player
                        );
                    }
                }
                action
            }
        }
    }

    fn run_strategy<F>(&mut self, state: &GameState, strategy: F) -> QuoridorEngineResult<Action>
    where
        F: FnOnce(&GameState, &mut StdRng, &mut AiStatistics) -> QuoridorEngineResult<Action>,
    {
        let rng = &mut self.rng;
        let stats = &mut self.stats;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| strategy(state, rng, stats)));

        let action = match outcome {
            Ok(result) => result?,
            Err(payload) => {
                return Err(QuoridorEngineError::StrategyPanicked {
                    message: panic_message(payload.as_ref()),
                })
            }
        };

        if !is_legal_action(state, &action) {
            return Err(QuoridorEngineError::IllegalDecision {
                action,
                player: self.player,
            });
        }

        Ok(action)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{apply_move, create_initial_state};

    #[test]
    fn test_decide_on_fresh_board() {
        for difficulty in Difficulty::ALL {
            let state = create_initial_state();
            let mut ai = Ai::with_seed(0, difficulty, 42);
            let action = ai.decide(&state).unwrap();
            assert!(is_legal_action(&state, &action));
            assert!(!ai.last_statistics().used_fallback());
            assert_eq!(ai.last_statistics().difficulty, difficulty);
        }
    }

    #[test]
    fn test_decide_does_not_touch_callers_state() {
        let state = create_initial_state();
        let before = state.clone();
        let mut ai = Ai::with_seed(0, Difficulty::Hard, 1);
        ai.decide(&state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_decide_out_of_turn_returns_none() {
        let state = create_initial_state();
        let mut ai = Ai::with_seed(1, Difficulty::Medium, 5);
        assert_eq!(ai.decide(&state), None);
        assert!(!ai.last_statistics().stuck);

        let state = apply_move(4, 1, &state);
        assert!(ai.decide(&state).is_some());
    }

    #[test]
    fn test_decide_on_finished_game_returns_none() {
        let mut state = create_initial_state();
        state.winner = Some(1);
        let mut ai = Ai::with_seed(0, Difficulty::Easy, 5);
        assert_eq!(ai.decide(&state), None);
    }

    #[test]
    fn test_seeded_ai_is_deterministic() {
        let state = create_initial_state();
        for difficulty in Difficulty::ALL {
            let mut a = Ai::with_seed(0, difficulty, 99);
            let mut b = Ai::with_seed(0, difficulty, 99);
            for _ in 0..5 {
                assert_eq!(a.decide(&state), b.decide(&state));
            }
        }
    }

    #[test]
    fn test_boxed_in_ai_reports_stuck() {
        //! The tier finds nothing, the fallback finds nothing, the AI says so
        let mut state = create_initial_state();
        state.players[0].position = Position::new(0, 0);
        state.walls = vec![Wall::horizontal(0, 0), Wall::vertical(0, 0)];
        state.wall_owners = vec![1, 1];
        state.players[1].walls_left = 8;

        let mut ai = Ai::with_seed(0, Difficulty::Easy, 8);
        assert_eq!(ai.decide(&state), None);
        let stats = ai.last_statistics();
        assert!(stats.stuck);
        assert!(stats.used_fallback());
    }

    #[test]
    fn test_panicking_strategy_falls_back_to_legal_move() {
        //! A tier that panics must not take the AI down with it
        let state = create_initial_state();
        let mut ai = Ai::with_seed(0, Difficulty::Hard, 13);
        let action = ai
            .decide_with(&state, |_, _, _| panic!("evaluation blew up"))
            .unwrap();

        assert!(matches!(action, Action::Move(_)));
        assert!(is_legal_action(&state, &action));
        let stats = ai.last_statistics();
        assert_eq!(stats.fallback, Some(FallbackReason::Panicked));
        assert!(!stats.stuck);
    }

    #[test]
    fn test_illegal_decision_falls_back_to_legal_move() {
        //! An off-grid wall fails re-validation and is replaced
        let state = create_initial_state();
        let mut ai = Ai::with_seed(0, Difficulty::Medium, 21);
        let action = ai
            .decide_with(&state, |_, _, _| Ok(Action::Wall(Wall::horizontal(8, 8))))
            .unwrap();

        assert!(is_legal_action(&state, &action));
        assert_ne!(action, Action::Wall(Wall::horizontal(8, 8)));
        let stats = ai.last_statistics();
        assert_eq!(stats.fallback, Some(FallbackReason::IllegalDecision));
        assert_eq!(stats.score, None);
    }

    #[test]
    fn test_search_error_falls_back_to_legal_move() {
        let state = apply_move(4, 1, &create_initial_state());
        let mut ai = Ai::with_seed(1, Difficulty::Hard, 4);
        let action = ai
            .decide_with(&state, |_, _, _| {
                Err(QuoridorEngineError::SearchError {
                    message: "inconsistent node".to_string(),
                })
            })
            .unwrap();

        assert!(is_legal_action(&state, &action));
        assert_eq!(
            ai.last_statistics().fallback,
            Some(FallbackReason::SearchFailed)
        );
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
    }
}
