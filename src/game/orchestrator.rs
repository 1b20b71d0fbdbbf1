/*!
 * Game Orchestrator
 *
 * Builds the shared table, launches one named thread per seat, waits for all
 * of them and reports the final scores. No scoring or synchronization logic
 * lives here.
 */

use super::action::Action;
use super::player::{Player, PlayerStats};
use super::report::{ConsoleReporter, ScoreReporter};
use super::rounds::Rounds;
use super::source::{ActionSource, RandomActions};
use super::state::{RoundRecord, RoundState};
use super::turn::Table;
use crate::core::errors::GameError;
use crate::core::limits::PLAYER_COUNT;
use crate::core::types::{GameResult, Scores};
use serde::Serialize;
use std::sync::Arc;
use std::thread;
use tracing::{info, info_span};
use uuid::Uuid;

/// Everything known about a game once every player has finished
#[derive(Debug, Clone, Serialize)]
pub struct GameOutcome {
    pub game_id: Uuid,
    pub rounds: Rounds,
    pub scores: Scores,
    pub history: Vec<RoundRecord>,
    pub players: Vec<PlayerStats>,
    /// Choices on the table after the final reset
    pub final_choices: [Option<Action>; PLAYER_COUNT],
}

/// Builder for a `Game`
pub struct GameBuilder {
    rounds: Rounds,
    seed: Option<u64>,
    sources: Option<[Box<dyn ActionSource>; PLAYER_COUNT]>,
    reporter: Option<Arc<dyn ScoreReporter>>,
}

impl GameBuilder {
    /// Seed every player's random stream; ignored when sources are given
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the default random sources, one per seat
    pub fn sources(mut self, sources: [Box<dyn ActionSource>; PLAYER_COUNT]) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Where round and final scores go; defaults to `ConsoleReporter`
    pub fn reporter(mut self, reporter: Arc<dyn ScoreReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn build(self) -> Game {
        let rounds = self.rounds;
        let seed = self.seed;
        let sources = self.sources.unwrap_or_else(|| {
            std::array::from_fn(|player| -> Box<dyn ActionSource> {
                match seed {
                    Some(seed) => Box::new(RandomActions::seeded(seed, player)),
                    None => Box::new(RandomActions::from_entropy()),
                }
            })
        });

        Game {
            id: Uuid::new_v4(),
            rounds,
            sources,
            reporter: self.reporter.unwrap_or_else(|| Arc::new(ConsoleReporter::default())),
        }
    }
}

/// A configured game, ready to play once
pub struct Game {
    id: Uuid,
    rounds: Rounds,
    sources: [Box<dyn ActionSource>; PLAYER_COUNT],
    reporter: Arc<dyn ScoreReporter>,
}

impl Game {
    /// Start configuring a game of `rounds` rounds
    pub fn builder(rounds: Rounds) -> GameBuilder {
        GameBuilder {
            rounds,
            seed: None,
            sources: None,
            reporter: None,
        }
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn rounds(&self) -> Rounds {
        self.rounds
    }

    /// Run every round to completion on `PLAYER_COUNT` threads
    ///
    /// If a worker cannot be spawned, the ones already started stay parked at
    /// the first barrier.
    pub fn play(self) -> GameResult<GameOutcome> {
        let span = info_span!("game", game_id = %self.id, rounds = self.rounds.get());
        let _entered = span.enter();
        info!("starting game");

        let table = Arc::new(Table::new(PLAYER_COUNT, RoundState::new(self.rounds)));

        let mut handles = Vec::with_capacity(PLAYER_COUNT);
        for (id, source) in self.sources.into_iter().enumerate() {
            let player = Player::new(id, table.clone(), source, self.reporter.clone());
            let parent = span.clone();
            let handle = thread::Builder::new()
                .name(format!("player-{id}"))
                .spawn(move || {
                    let _entered = parent.enter();
                    player.run()
                })
                .map_err(|source| GameError::SpawnFailed { player: id, source })?;
            handles.push(handle);
        }

        let mut players = Vec::with_capacity(PLAYER_COUNT);
        for (id, handle) in handles.into_iter().enumerate() {
            let stats = handle.join().map_err(|_| GameError::WorkerPanicked(id))?;
            players.push(stats);
        }
        info!(players = players.len(), "waited on all players");

        // Each worker dropped its handle when `Player::run` returned and every
        // worker has been joined, so this is the last reference
        let state = Arc::into_inner(table)
            .map(Table::into_inner)
            .ok_or(GameError::TableStillShared)?;

        self.reporter.game_finished(state.scores());

        Ok(GameOutcome {
            game_id: self.id,
            rounds: self.rounds,
            scores: *state.scores(),
            history: state.history().to_vec(),
            players,
            final_choices: *state.choices(),
        })
    }
}
