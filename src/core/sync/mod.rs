/*!
 * Synchronization Primitives
 *
 * Lock-and-condvar rendezvous used to run players in lock-step.
 *
 * # Architecture
 *
 * The rendezvous owns both the mutex and the condition variable, together
 * with the data they protect. Callers only ever see that data through a
 * `Seat`, which holds the lock, so waiting or signalling without the lock
 * cannot be expressed.
 */

mod rendezvous;

pub use rendezvous::{Phase, Rendezvous, Seat};
