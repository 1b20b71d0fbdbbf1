/*!
 * RPS Rendezvous Library
 *
 * Three player threads play rock-paper-scissors in lock-step. A two-phase
 * barrier built from one mutex and one condition variable reveals every
 * choice at once and elects the last arriver to score the round.
 */

pub mod core;
pub mod game;
pub mod input;
pub mod monitoring;

// Re-exports
pub use crate::core::errors::GameError;
pub use crate::core::limits::{MAX_ROUNDS, MIN_ROUNDS, PLAYER_COUNT};
pub use crate::core::sync::{Phase, Rendezvous, Seat};
pub use crate::core::types::{GameResult, PlayerId, RoundIndex, Scores};
pub use game::{
    resolve, Action, ActionSource, ConsoleReporter, Game, GameBuilder, GameOutcome,
    LineReporter, PlayerStats, RandomActions, RecordingReporter, RoundRecord, RoundState, Rounds,
    ScoreReporter, ScriptedActions, TracingReporter,
};
pub use input::prompt_rounds;
pub use monitoring::init_tracing;
