/*!
 * Game Module
 * Rock-paper-scissors played in lock-step by a fixed set of player threads
 */

pub mod action;
pub mod orchestrator;
pub mod player;
pub mod report;
pub mod resolver;
pub mod rounds;
pub mod source;
pub mod state;
pub mod turn;

pub use action::Action;
pub use orchestrator::{Game, GameBuilder, GameOutcome};
pub use player::{Player, PlayerStats};
pub use report::{
    ConsoleReporter, LineReporter, RecordingReporter, RoundReport, ScoreReporter, TracingReporter,
};
pub use resolver::resolve;
pub use rounds::Rounds;
pub use source::{ActionSource, RandomActions, ScriptedActions};
pub use state::{RoundRecord, RoundState};
pub use turn::{Choosing, Revealed, Table, Turn, TurnState};
