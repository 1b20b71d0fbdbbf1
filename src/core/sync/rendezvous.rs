/*!
 * Two-Phase Rendezvous Barrier
 *
 * A reusable barrier built from one `parking_lot::Mutex` and one
 * `parking_lot::Condvar` that also guards the data the participants share.
 *
 * # Protocol
 *
 * Every participant holds the lock for its whole turn and calls
 * `arrive_and_wait` once per phase. The call records the participant's
 * contribution, then either:
 * - suspends on the condvar (releasing the lock) until the barrier is
 *   released, returning `false`, or
 * - completes the barrier as the last arriver, broadcasts the release and
 *   returns `true` while still holding the lock.
 *
 * Exactly one caller per phase sees `true`. Waiters wait on a release
 * generation rather than on the shared data itself, because the last arriver
 * may already be mutating the data for the next phase by the time they wake.
 *
 * # Phases
 *
 * `Choose` and `Reset` strictly alternate, so a single arrival counter serves
 * both: nobody can arrive at `Reset` before everyone has left `Choose`.
 */

use parking_lot::{Condvar, Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::trace;

/// Barrier phase within one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Participants publish their contribution for the round
    Choose,
    /// Participants withdraw it before the next round
    Reset,
}

impl Phase {
    /// Phase collected after this one is released
    #[inline]
    #[must_use]
    pub const fn next(self) -> Phase {
        match self {
            Phase::Choose => Phase::Reset,
            Phase::Reset => Phase::Choose,
        }
    }
}

/// Lock-protected barrier bookkeeping plus the shared data
#[derive(Debug)]
struct Slot<T> {
    data: T,
    arrived: usize,
    generation: u64,
    phase: Phase,
}

/// Reusable rendezvous for a fixed number of participants
///
/// # Examples
///
/// ```
/// use rps_rendezvous::core::sync::{Phase, Rendezvous};
///
/// let rendezvous = Rendezvous::new(1, 0u32);
/// let mut seat = rendezvous.lock();
/// // A lone participant is always the last arriver
/// assert!(seat.arrive_and_wait(Phase::Choose, |count| *count += 1));
/// assert_eq!(*seat, 1);
/// ```
#[derive(Debug)]
pub struct Rendezvous<T> {
    slot: Mutex<Slot<T>>,
    released: Condvar,
    participants: usize,
}

impl<T> Rendezvous<T> {
    /// Create a rendezvous for `participants` parties sharing `data`
    ///
    /// # Panics
    ///
    /// Panics if `participants` is zero; such a barrier could never release.
    pub fn new(participants: usize, data: T) -> Self {
        assert!(participants > 0, "rendezvous needs at least one participant");
        Self {
            slot: Mutex::new(Slot {
                data,
                arrived: 0,
                generation: 0,
                phase: Phase::Choose,
            }),
            released: Condvar::new(),
            participants,
        }
    }

    #[inline]
    pub fn participants(&self) -> usize {
        self.participants
    }

    /// Acquire exclusive access to the shared data
    pub fn lock(&self) -> Seat<'_, T> {
        Seat {
            rendezvous: self,
            guard: self.slot.lock(),
        }
    }

    /// Phase currently being collected
    pub fn phase(&self) -> Phase {
        self.slot.lock().phase
    }

    /// Number of barriers released so far
    pub fn generation(&self) -> u64 {
        self.slot.lock().generation
    }

    /// Consume the rendezvous and return the shared data
    pub fn into_inner(self) -> T {
        self.slot.into_inner().data
    }
}

/// Exclusive, lock-holding access to a rendezvous
///
/// The lock is released when the seat is dropped, and temporarily while
/// blocked inside `arrive_and_wait`.
pub struct Seat<'a, T> {
    rendezvous: &'a Rendezvous<T>,
    guard: MutexGuard<'a, Slot<T>>,
}

impl<'a, T> Seat<'a, T> {
    /// Record a contribution for `phase` and wait for every participant
    ///
    /// Returns `true` to exactly one caller per phase: the one whose arrival
    /// completed the barrier. Others return `false` once released.
    ///
    /// # Panics
    ///
    /// Panics if `phase` is not the phase currently being collected, before
    /// the contribution is recorded.
    pub fn arrive_and_wait<F>(&mut self, phase: Phase, contribute: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let participants = self.rendezvous.participants;
        let slot = &mut *self.guard;
        assert_eq!(slot.phase, phase, "arrived at the wrong phase");

        contribute(&mut slot.data);
        slot.arrived += 1;

        if slot.arrived == participants {
            slot.arrived = 0;
            slot.generation = slot.generation.wrapping_add(1);
            slot.phase = phase.next();
            let woken = self.rendezvous.released.notify_all();
            trace!(?phase, woken, "last arrival, barrier released");
            return true;
        }

        let generation = slot.generation;
        trace!(?phase, arrived = slot.arrived, participants, "waiting for others");
        // Loop guards against spurious wake-ups
        while self.guard.generation == generation {
            self.rendezvous.released.wait(&mut self.guard);
        }
        trace!(?phase, "released");
        false
    }

    /// Phase this seat's next arrival belongs to
    #[inline]
    pub fn phase(&self) -> Phase {
        self.guard.phase
    }
}

impl<T> Deref for Seat<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard.data
    }
}

impl<T> DerefMut for Seat<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_single_participant_is_always_last() {
        let rendezvous = Rendezvous::new(1, Vec::new());
        for round in 0..3 {
            let mut seat = rendezvous.lock();
            assert!(seat.arrive_and_wait(Phase::Choose, |v| v.push(round)));
            assert_eq!(seat.phase(), Phase::Reset);
            assert!(seat.arrive_and_wait(Phase::Reset, |v| v.push(round)));
        }
        assert_eq!(rendezvous.generation(), 6);
        assert_eq!(rendezvous.into_inner(), vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_phase_alternates() {
        assert_eq!(Phase::Choose.next(), Phase::Reset);
        assert_eq!(Phase::Reset.next(), Phase::Choose);
    }

    #[test]
    #[should_panic(expected = "arrived at the wrong phase")]
    fn test_wrong_phase_rejected() {
        let rendezvous = Rendezvous::new(2, 0u32);
        let mut seat = rendezvous.lock();
        seat.arrive_and_wait(Phase::Reset, |n| *n += 1);
    }

    #[test]
    #[should_panic(expected = "at least one participant")]
    fn test_zero_participants_rejected() {
        let _ = Rendezvous::new(0, ());
    }

    #[test]
    fn test_two_participants_elect_one() {
        let rendezvous = Arc::new(Rendezvous::new(2, 0usize));
        assert_eq!(rendezvous.participants(), 2);

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let rendezvous = rendezvous.clone();
                thread::spawn(move || {
                    let mut seat = rendezvous.lock();
                    let last = seat.arrive_and_wait(Phase::Choose, |n| *n += 1);
                    // Nobody leaves before both have contributed
                    assert_eq!(*seat, 2);
                    last
                })
            })
            .collect();

        let elected: usize = handles
            .into_iter()
            .map(|h| usize::from(h.join().unwrap()))
            .sum();
        assert_eq!(elected, 1);
        assert_eq!(rendezvous.phase(), Phase::Reset);
    }
}
