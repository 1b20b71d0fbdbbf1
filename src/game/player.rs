/*!
 * Player Worker
 *
 * The loop every seat runs on its own thread: choose, reveal, score the
 * round if elected, reset, repeat.
 */

use super::report::ScoreReporter;
use super::resolver::resolve;
use super::source::ActionSource;
use super::turn::{Table, Turn};
use crate::core::types::PlayerId;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info_span};

/// Per-player tally of barrier elections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayerStats {
    pub player: PlayerId,
    pub rounds_played: u32,
    /// Rounds this player resolved as last to reveal
    pub rounds_resolved: u32,
    /// Reset barriers this player released as last to reset
    pub resets_released: u32,
}

/// One seat at the table
pub struct Player {
    id: PlayerId,
    table: Arc<Table>,
    source: Box<dyn ActionSource>,
    reporter: Arc<dyn ScoreReporter>,
}

impl Player {
    pub fn new(
        id: PlayerId,
        table: Arc<Table>,
        source: Box<dyn ActionSource>,
        reporter: Arc<dyn ScoreReporter>,
    ) -> Self {
        Self {
            id,
            table,
            source,
            reporter,
        }
    }

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Play every round of the game and return this player's tally
    ///
    /// Blocks inside the table's barriers until the other players arrive.
    pub fn run(mut self) -> PlayerStats {
        let _span = info_span!("player", id = self.id).entered();
        let mut stats = PlayerStats {
            player: self.id,
            ..PlayerStats::default()
        };

        // Immutable after game start, identical for every seat
        let rounds_total = self.table.lock().rounds_total().get();

        for round in 0..rounds_total {
            let turn = Turn::begin(&self.table, self.id);
            let action = self.source.next_action();
            debug!(round, %action, "selected action");

            let mut revealed = turn.reveal(action);
            if let Some(state) = revealed.elected() {
                let actions = state
                    .revealed()
                    .expect("choose barrier released before every seat revealed");
                let deltas = resolve(&actions);
                state.apply(round, actions, deltas);
                debug!(round, ?actions, ?deltas, "resolved round");
                self.reporter.round_resolved(round, state.scores());
                stats.rounds_resolved += 1;
            }

            if revealed.reset() {
                debug!(round, "reset choice, all seats reset");
                stats.resets_released += 1;
            } else {
                debug!(round, "reset choice, released by another seat");
            }
            stats.rounds_played += 1;
        }

        debug!(?stats, "player finished");
        stats
    }
}
