//! Cancellation budgets threaded through the search.
//!
//! Every recursive call in the square builder (and every attempt in the
//! generator) asks its budget whether it has expired; once it has, the whole
//! stack unwinds and reports "nothing found". Budgets are passed explicitly,
//! so tests can swap the wall clock for a step counter.

use instant::Instant;
use std::cell::Cell;
use std::time::Duration;

/// Something that can tell a search to stop.
pub trait Budget {
    /// True once the search must give up.
    fn expired(&self) -> bool;
}

/// Wall-clock limit measured from construction.
///
/// Usage:
/// ```
///  use std::time::Duration;
///  use tetrad::budget::{Budget, TimeBudget};
///
///  let budget = TimeBudget::new(Duration::from_millis(50));
///  while !budget.expired() {
///    // do some work
///  #  break;
///  }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    start: Instant,   // when the budget began
    limit: Duration,  // maximum allowed elapsed time
}

impl TimeBudget {
    /// Create a new budget that lasts for `limit`.
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    /// Remaining time before expiration, or zero if already used up.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.start.elapsed())
    }
}

impl Budget for TimeBudget {
    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// Budget of a fixed number of checks: each `expired()` call uses one step.
///
/// Deterministic, so a cut-off search behaves identically on every run.
#[derive(Debug)]
pub struct StepBudget {
    remaining: Cell<u64>,
}

impl StepBudget {
    #[must_use]
    pub fn new(steps: u64) -> Self {
        Self { remaining: Cell::new(steps) }
    }

    /// Steps not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.remaining.get()
    }
}

impl Budget for StepBudget {
    fn expired(&self) -> bool {
        match self.remaining.get() {
            0 => true,
            n => {
                self.remaining.set(n - 1);
                false
            }
        }
    }
}

/// A budget that never runs out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl Budget for Unlimited {
    fn expired(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_time_budget_is_expired() {
        let budget = TimeBudget::new(Duration::ZERO);
        assert!(budget.expired());
        assert_eq!(budget.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_long_time_budget_is_not_expired() {
        let budget = TimeBudget::new(Duration::from_secs(3600));
        assert!(!budget.expired());
        assert!(budget.remaining() > Duration::from_secs(3000));
    }

    #[test]
    fn test_step_budget_counts_down() {
        let budget = StepBudget::new(3);
        assert!(!budget.expired());
        assert!(!budget.expired());
        assert!(!budget.expired());
        assert_eq!(budget.remaining(), 0);
        assert!(budget.expired());
        assert!(budget.expired());
    }

    #[test]
    fn test_unlimited() {
        assert!(!Unlimited.expired());
    }
}
