/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use super::types::PlayerId;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while configuring or running a game
///
/// Synchronization misuse has no variant here: the rendezvous API only
/// hands out shared state through a turn that already holds the lock.
#[derive(Error, Debug, Diagnostic)]
pub enum GameError {
    #[error("Round count {0} is out of range")]
    #[diagnostic(
        code(game::invalid_rounds),
        help("Choose between 1 and 100 rounds.")
    )]
    InvalidRounds(i64),

    #[error("Round count {0:?} is not a number")]
    #[diagnostic(
        code(game::unparsable_rounds),
        help("Enter a whole number such as 10.")
    )]
    UnparsableRounds(String),

    #[error("Input closed before a round count was entered")]
    #[diagnostic(
        code(input::closed),
        help("Pass --rounds or set RPS_ROUNDS when stdin is not interactive.")
    )]
    InputClosed,

    #[error("I/O error: {0}")]
    #[diagnostic(code(input::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to spawn worker for player {player}")]
    #[diagnostic(
        code(game::spawn_failed),
        help("The system may be out of threads. Check process limits.")
    )]
    SpawnFailed {
        player: PlayerId,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker for player {0} panicked")]
    #[diagnostic(
        code(game::worker_panicked),
        help("A player thread aborted mid-game. View logs for the panic message.")
    )]
    WorkerPanicked(PlayerId),

    #[error("Table still shared after every player was joined")]
    #[diagnostic(
        code(game::table_still_shared),
        help("A player handle outlived its worker thread.")
    )]
    TableStillShared,

    #[error("Failed to serialize game outcome: {0}")]
    #[diagnostic(code(game::serialization))]
    Serialization(#[from] serde_json::Error),
}
