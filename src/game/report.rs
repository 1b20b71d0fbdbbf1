/*!
 * Score Reporters
 *
 * Output side of the game. The elected player reports each round right after
 * resolving it, and the orchestrator reports the final scores once.
 */

use crate::core::limits::PLAYER_COUNT;
use crate::core::types::{RoundIndex, Scores};
use parking_lot::Mutex;
use serde::Serialize;
use std::io::{self, Write};
use tracing::{info, warn};

/// Receives running and final scores
pub trait ScoreReporter: Send + Sync {
    /// Called once per round, by the player that resolved it
    fn round_resolved(&self, round: RoundIndex, scores: &Scores);

    /// Called once, after every player has finished
    fn game_finished(&self, scores: &Scores);
}

fn seats(scores: &Scores) -> String {
    scores
        .iter()
        .enumerate()
        .map(|(seat, score)| format!("Player {}: {}", seat + 1, score))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plain text, one line per round
///
/// A failed write is logged once and otherwise ignored. The elected player
/// reports while holding the table lock, so a reporter must never take its
/// thread down: the other players would stay parked at the reset barrier.
#[derive(Debug)]
pub struct LineReporter<W> {
    out: Mutex<LineOutput<W>>,
}

#[derive(Debug)]
struct LineOutput<W> {
    writer: W,
    failed: bool,
}

/// `LineReporter` on stdout
pub type ConsoleReporter = LineReporter<io::Stdout>;

impl<W: Write + Send> LineReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            out: Mutex::new(LineOutput {
                writer,
                failed: false,
            }),
        }
    }

    fn emit(&self, line: std::fmt::Arguments<'_>) {
        let mut out = self.out.lock();
        if out.failed {
            return;
        }
        let writer = &mut out.writer;
        if let Err(e) = writeln!(writer, "{line}").and_then(|()| writer.flush()) {
            warn!(error = %e, "score output failed, further reports dropped");
            out.failed = true;
        }
    }

    /// Whether a write has failed and reports are being dropped
    pub fn has_failed(&self) -> bool {
        self.out.lock().failed
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().writer
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ScoreReporter for LineReporter<W> {
    fn round_resolved(&self, round: RoundIndex, scores: &Scores) {
        self.emit(format_args!("Game {} - {}", round + 1, seats(scores)));
    }

    fn game_finished(&self, scores: &Scores) {
        self.emit(format_args!("Final Score - {}", seats(scores)));
    }
}

/// Structured `info!` events instead of text
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ScoreReporter for TracingReporter {
    fn round_resolved(&self, round: RoundIndex, scores: &Scores) {
        info!(round, ?scores, "round resolved");
    }

    fn game_finished(&self, scores: &Scores) {
        info!(?scores, "game finished");
    }
}

/// A round report as captured by `RecordingReporter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub round: RoundIndex,
    pub scores: [u32; PLAYER_COUNT],
}

/// Keeps every report in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    rounds: Mutex<Vec<RoundReport>>,
    finals: Mutex<Vec<Scores>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Round reports in the order they were made
    pub fn rounds(&self) -> Vec<RoundReport> {
        self.rounds.lock().clone()
    }

    /// Every final report made; a finished game makes exactly one
    pub fn finals(&self) -> Vec<Scores> {
        self.finals.lock().clone()
    }
}

impl ScoreReporter for RecordingReporter {
    fn round_resolved(&self, round: RoundIndex, scores: &Scores) {
        self.rounds.lock().push(RoundReport {
            round,
            scores: *scores,
        });
    }

    fn game_finished(&self, scores: &Scores) {
        self.finals.lock().push(*scores);
    }
}
