//! Reusable rendezvous barrier
//!
//! Both axis legs of a move arrive here before motion starts, so the
//! two motors begin as close to simultaneously as possible. The last
//! arrival performs the release itself and never waits. A generation
//! counter makes the barrier reusable across unboundedly many rounds
//! without the reset race of a shared set/clear event.
//!
//! The bounded wait is a liveness safety valve, not a correctness
//! guarantee: a participant that times out withdraws its arrival and
//! proceeds unsynchronized. Callers treat a timeout as a degraded,
//! logged condition, never a failure.

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// Outcome of one arrival at the rendezvous
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// All participants arrived; the round was released
    Released,
    /// The wait timed out; this participant proceeds unsynchronized
    TimedOut,
}

#[derive(Debug)]
struct RendezvousState {
    /// Participants currently waiting; always zero between releases
    arrived: usize,
    /// Incremented on every release
    generation: u64,
}

/// N-participant reusable rendezvous point
#[derive(Debug)]
pub struct Rendezvous {
    required: usize,
    timeout: Duration,
    state: Mutex<RendezvousState>,
    go: Condvar,
}

impl Rendezvous {
    /// Create a rendezvous for `required` participants
    pub fn new(required: usize, timeout: Duration) -> Self {
        Self {
            required,
            timeout,
            state: Mutex::new(RendezvousState {
                arrived: 0,
                generation: 0,
            }),
            go: Condvar::new(),
        }
    }

    /// Arrive at the rendezvous
    ///
    /// The `required`-th arrival releases all waiters, resets the
    /// arrived count, and returns immediately. Earlier arrivals block
    /// until released or until the bounded timeout elapses.
    pub fn arrive(&self) -> Arrival {
        let mut state = self.state.lock();

        if state.arrived == self.required - 1 {
            state.arrived = 0;
            state.generation = state.generation.wrapping_add(1);
            self.go.notify_all();
            return Arrival::Released;
        }

        state.arrived += 1;
        let generation = state.generation;
        let deadline = Instant::now() + self.timeout;

        while state.generation == generation {
            let result = self.go.wait_until(&mut state, deadline);
            if result.timed_out() && state.generation == generation {
                // Withdraw the arrival so the count cannot go stale
                state.arrived -= 1;
                return Arrival::TimedOut;
            }
        }
        Arrival::Released
    }

    /// Number of participants currently waiting
    pub fn arrived(&self) -> usize {
        self.state.lock().arrived
    }

    /// Number of participants required per round
    pub fn required(&self) -> usize {
        self.required
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_last_arrival_releases_both() {
        let barrier = Arc::new(Rendezvous::new(2, Duration::from_secs(5)));

        let waiter = {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || barrier.arrive())
        };

        // Give the waiter time to block at the rendezvous
        while barrier.arrived() == 0 {
            thread::yield_now();
        }

        assert_eq!(barrier.arrive(), Arrival::Released);
        assert_eq!(waiter.join().unwrap(), Arrival::Released);
        assert_eq!(barrier.arrived(), 0);
    }

    #[test]
    fn test_timeout_withdraws_arrival() {
        let barrier = Rendezvous::new(2, Duration::from_millis(10));
        assert_eq!(barrier.arrive(), Arrival::TimedOut);
        assert_eq!(barrier.arrived(), 0);
    }

    #[test]
    fn test_reusable_across_rounds() {
        let barrier = Arc::new(Rendezvous::new(2, Duration::from_secs(5)));

        for _ in 0..20 {
            let waiter = {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || barrier.arrive())
            };
            while barrier.arrived() == 0 {
                thread::yield_now();
            }
            assert_eq!(barrier.arrive(), Arrival::Released);
            assert_eq!(waiter.join().unwrap(), Arrival::Released);
            assert_eq!(barrier.arrived(), 0);
        }
    }

    #[test]
    fn test_single_participant_never_waits() {
        let barrier = Rendezvous::new(1, Duration::from_secs(5));
        assert_eq!(barrier.arrive(), Arrival::Released);
        assert_eq!(barrier.arrive(), Arrival::Released);
        assert_eq!(barrier.arrived(), 0);
    }

    #[test]
    fn test_release_after_timed_out_partner() {
        let barrier = Rendezvous::new(2, Duration::from_millis(10));
        // First participant gives up; a later pair must still work
        assert_eq!(barrier.arrive(), Arrival::TimedOut);

        let barrier = Arc::new(barrier);
        let waiter = {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || barrier.arrive())
        };
        // The waiter either pairs with us or times out on a slow
        // machine; the arrived count must be clean either way.
        let _ = barrier.arrive();
        let _ = waiter.join().unwrap();
        assert_eq!(barrier.arrived(), 0);
    }
}
