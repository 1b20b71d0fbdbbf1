/*!
 * Round State
 * Shared per-game data: each seat's current choice and running score
 */

use super::action::Action;
use super::rounds::Rounds;
use crate::core::limits::PLAYER_COUNT;
use crate::core::types::{PlayerId, RoundIndex, Scores};
use serde::{Deserialize, Serialize};

/// One resolved round, kept for reporting and auditing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: RoundIndex,
    pub actions: [Action; PLAYER_COUNT],
    pub deltas: Scores,
}

/// State shared by every player for the duration of one game
///
/// Lives inside the rendezvous and is only reachable through a turn that
/// holds its lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    rounds_total: Rounds,
    choices: [Option<Action>; PLAYER_COUNT],
    scores: Scores,
    history: Vec<RoundRecord>,
}

impl RoundState {
    pub fn new(rounds_total: Rounds) -> Self {
        Self {
            rounds_total,
            choices: [None; PLAYER_COUNT],
            scores: [0; PLAYER_COUNT],
            history: Vec::with_capacity(rounds_total.get() as usize),
        }
    }

    #[inline]
    pub fn rounds_total(&self) -> Rounds {
        self.rounds_total
    }

    #[inline]
    pub fn choices(&self) -> &[Option<Action>; PLAYER_COUNT] {
        &self.choices
    }

    #[inline]
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    #[inline]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Number of seats that have a choice recorded
    pub fn chosen_count(&self) -> usize {
        self.choices.iter().filter(|c| c.is_some()).count()
    }

    /// All choices, if every seat has revealed one
    pub fn revealed(&self) -> Option<[Action; PLAYER_COUNT]> {
        let mut actions = [Action::Rock; PLAYER_COUNT];
        for (slot, choice) in actions.iter_mut().zip(self.choices) {
            *slot = choice?;
        }
        Some(actions)
    }

    pub(crate) fn set_choice(&mut self, player: PlayerId, action: Action) {
        assert!(
            self.choices[player].is_none(),
            "player {player} chose twice in one round"
        );
        self.choices[player] = Some(action);
    }

    pub(crate) fn clear_choice(&mut self, player: PlayerId) {
        self.choices[player] = None;
    }

    /// Add one round's deltas to the running scores and record the round
    pub fn apply(&mut self, round: RoundIndex, actions: [Action; PLAYER_COUNT], deltas: Scores) {
        for (score, delta) in self.scores.iter_mut().zip(deltas) {
            *score += delta;
        }
        self.history.push(RoundRecord {
            round,
            actions,
            deltas,
        });
    }
}
