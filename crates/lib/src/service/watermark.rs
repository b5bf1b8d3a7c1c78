//! Highest-Z watermark.
//!
//! The watermark records the highest Z-index the service has handed out so
//! that a widget created without an explicit Z can be sent to the
//! foreground. Raising it is an optimistic compare-and-swap that gives up
//! after a bounded number of attempts, so under heavy contention the value is
//! a lower bound rather than an exact maximum.

use std::sync::atomic::{AtomicI64, Ordering};

/// Result of a [`bounded_update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The value was swapped from `previous` to `current`.
    Updated {
        /// Value before the swap
        previous: i64,
        /// Value after the swap
        current: i64,
    },
    /// The update function declined to change the observed value.
    Unchanged {
        /// The value that was observed
        current: i64,
    },
    /// Every attempt lost a race with another writer.
    Abandoned {
        /// Number of compare-and-swap attempts made
        attempts: usize,
    },
}

/// Read-compare-swap with a retry bound.
///
/// `f` maps the observed value to the desired one, or `None` to leave it
/// alone. Each lost race re-reads the cell and tries again, at most
/// `max_attempts` times.
pub fn bounded_update(
    cell: &AtomicI64,
    max_attempts: usize,
    f: impl Fn(i64) -> Option<i64>,
) -> UpdateOutcome {
    let mut observed = cell.load(Ordering::Acquire);
    for _ in 0..max_attempts {
        let Some(desired) = f(observed) else {
            return UpdateOutcome::Unchanged { current: observed };
        };
        match cell.compare_exchange(observed, desired, Ordering::AcqRel, Ordering::Acquire) {
            Ok(previous) => {
                return UpdateOutcome::Updated {
                    previous,
                    current: desired,
                };
            }
            Err(actual) => observed = actual,
        }
    }
    UpdateOutcome::Abandoned {
        attempts: max_attempts,
    }
}

/// Best-effort record of the highest Z-index assigned so far.
#[derive(Debug)]
pub struct Watermark {
    value: AtomicI64,
    max_attempts: usize,
}

impl Watermark {
    /// Starts the watermark at `initial`; raises give up after `max_attempts`.
    pub fn new(initial: i64, max_attempts: usize) -> Self {
        Self {
            value: AtomicI64::new(initial),
            max_attempts,
        }
    }

    /// Current value.
    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Acquire)
    }

    /// Atomically increments the watermark and returns the new value.
    ///
    /// Returns `None`, leaving the watermark untouched, if it already sits at
    /// `i64::MAX`.
    pub fn next(&self) -> Option<i64> {
        self.value
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |z| z.checked_add(1))
            .ok()
            .map(|previous| previous + 1)
    }

    /// Raises the watermark to `candidate` if `candidate` is higher.
    pub fn raise_to(&self, candidate: i64) -> UpdateOutcome {
        bounded_update(&self.value, self.max_attempts, |current| {
            (candidate > current).then_some(candidate)
        })
    }
}
