use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, PoisonError};

use super::strategy::Strategy;

/// An account balance shared by every worker of one trial.
///
/// `i64` holds the sum of any realistic number of [-100, 100] deltas: it
/// would take more than 9e16 transactions to overflow.
#[derive(Debug)]
pub enum SharedCounter {
    /// Read-modify-write as two independent relaxed accesses. Each access is
    /// well defined, but concurrent updates interleave between the load and
    /// the store and overwrite each other.
    Unsynchronized(AtomicI64),
    Atomic(AtomicI64),
    Mutex(Mutex<i64>),
}

impl SharedCounter {
    pub fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Unsynchronized => SharedCounter::Unsynchronized(AtomicI64::new(0)),
            Strategy::Atomic => SharedCounter::Atomic(AtomicI64::new(0)),
            Strategy::Mutex => SharedCounter::Mutex(Mutex::new(0)),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            SharedCounter::Unsynchronized(_) => Strategy::Unsynchronized,
            SharedCounter::Atomic(_) => Strategy::Atomic,
            SharedCounter::Mutex(_) => Strategy::Mutex,
        }
    }

    /// Applies one transaction using this counter's discipline.
    #[inline]
    pub fn apply(&self, delta: i64) {
        match self {
            SharedCounter::Unsynchronized(balance) => {
                let current = balance.load(Ordering::Relaxed);
                balance.store(current + delta, Ordering::Relaxed);
            }
            SharedCounter::Atomic(balance) => {
                balance.fetch_add(delta, Ordering::Relaxed);
            }
            SharedCounter::Mutex(balance) => {
                // The guarded value is a plain integer, so a poisoned lock is still usable.
                *balance.lock().unwrap_or_else(PoisonError::into_inner) += delta;
            }
        }
    }

    /// Current balance. Only meaningful once every worker has been joined.
    pub fn value(&self) -> i64 {
        match self {
            SharedCounter::Unsynchronized(balance) | SharedCounter::Atomic(balance) => {
                balance.load(Ordering::SeqCst)
            }
            SharedCounter::Mutex(balance) => *balance.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    pub fn reset(&mut self) {
        match self {
            SharedCounter::Unsynchronized(balance) | SharedCounter::Atomic(balance) => {
                *balance.get_mut() = 0;
            }
            SharedCounter::Mutex(balance) => {
                *balance.get_mut().unwrap_or_else(PoisonError::into_inner) = 0;
            }
        }
    }
}

/// One independent counter per strategy.
///
/// Keeping separate storage means one strategy's trial never leaves
/// artifacts in another's baseline.
#[derive(Debug)]
pub struct CounterSet {
    unsynchronized: SharedCounter,
    atomic: SharedCounter,
    mutex: SharedCounter,
}

impl CounterSet {
    pub fn new() -> Self {
        Self {
            unsynchronized: SharedCounter::new(Strategy::Unsynchronized),
            atomic: SharedCounter::new(Strategy::Atomic),
            mutex: SharedCounter::new(Strategy::Mutex),
        }
    }

    pub fn get(&self, strategy: Strategy) -> &SharedCounter {
        match strategy {
            Strategy::Unsynchronized => &self.unsynchronized,
            Strategy::Atomic => &self.atomic,
            Strategy::Mutex => &self.mutex,
        }
    }

    pub fn get_mut(&mut self, strategy: Strategy) -> &mut SharedCounter {
        match strategy {
            Strategy::Unsynchronized => &mut self.unsynchronized,
            Strategy::Atomic => &mut self.atomic,
            Strategy::Mutex => &mut self.mutex,
        }
    }

    pub fn reset_all(&mut self) {
        for strategy in Strategy::ALL {
            self.get_mut(strategy).reset();
        }
    }
}

impl Default for CounterSet {
    fn default() -> Self {
        Self::new()
    }
}
