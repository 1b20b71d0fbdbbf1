/*!
 * Player Turns with Type-State
 *
 * A turn is one player's lock-holding pass through one round. Its type
 * encodes where in the round the player is:
 *
 * - `Turn<Choosing>`: lock held, the player has not revealed yet
 * - `Turn<Revealed>`: past the choose barrier, scores may be written only if
 *   this turn was elected
 *
 * Resetting consumes the turn and releases the lock, so phases cannot be
 * skipped or repeated.
 */

use super::action::Action;
use super::state::RoundState;
use crate::core::sync::{Phase, Rendezvous, Seat};
use crate::core::types::PlayerId;
use std::marker::PhantomData;

/// Rendezvous shared by the players of one game
pub type Table = Rendezvous<RoundState>;

/// Turn state marker trait
pub trait TurnState {}

/// Type marker: lock held, choice not yet revealed
pub struct Choosing;
impl TurnState for Choosing {}

/// Type marker: choose barrier passed
pub struct Revealed;
impl TurnState for Revealed {}

/// One player's exclusive pass through a round
pub struct Turn<'a, S: TurnState = Choosing> {
    seat: Seat<'a, RoundState>,
    player: PlayerId,
    elected: bool,
    _state: PhantomData<S>,
}

impl<'a> Turn<'a, Choosing> {
    /// Take the table lock for `player`'s turn in the next round
    pub fn begin(table: &'a Table, player: PlayerId) -> Self {
        Self {
            seat: table.lock(),
            player,
            elected: false,
            _state: PhantomData,
        }
    }

    /// Publish this player's action and wait until every player has
    ///
    /// # Type Safety
    ///
    /// Returns `Turn<Revealed>` - different type!
    pub fn reveal(mut self, action: Action) -> Turn<'a, Revealed> {
        let player = self.player;
        let elected = self
            .seat
            .arrive_and_wait(Phase::Choose, |state| state.set_choice(player, action));

        Turn {
            seat: self.seat,
            player,
            elected,
            _state: PhantomData,
        }
    }
}

impl<'a> Turn<'a, Revealed> {
    /// Whether this player's reveal completed the choose barrier
    #[inline]
    pub fn is_elected(&self) -> bool {
        self.elected
    }

    /// Mutable round state, granted only to the elected player
    pub fn elected(&mut self) -> Option<&mut RoundState> {
        if self.elected {
            Some(&mut *self.seat)
        } else {
            None
        }
    }

    /// Clear this player's choice and wait until every player has
    ///
    /// Returns `true` if this player completed the reset barrier. The lock is
    /// released when this returns.
    pub fn reset(mut self) -> bool {
        let player = self.player;
        self.seat
            .arrive_and_wait(Phase::Reset, |state| state.clear_choice(player))
    }
}

impl<S: TurnState> Turn<'_, S> {
    #[inline]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Read-only view of the round state
    #[inline]
    pub fn state(&self) -> &RoundState {
        &self.seat
    }
}
