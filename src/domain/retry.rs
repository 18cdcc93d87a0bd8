//! Bounded, fixed-interval retry budget shared by both polling loops.

use std::time::Duration;

/// Maximum attempts and the fixed delay between them.
///
/// Exhausting the budget is a terminal failure, never a silent skip. There is
/// no backoff and no jitter; stabilization polling is deliberately simple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryBudget {
    /// 40 attempts, 15-second delay: roughly ten minutes of waiting.
    pub const DEFAULT: Self = Self {
        max_attempts: 40,
        delay: Duration::from_secs(15),
    };

    /// At least one probe is always made, so a zero attempt count is bumped
    /// up to one.
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: if max_attempts == 0 { 1 } else { max_attempts },
            delay,
        }
    }
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_attempts_clamps_to_one() {
        let budget = RetryBudget::new(0, Duration::from_secs(1));
        assert_eq!(budget.max_attempts, 1);
    }

    #[test]
    fn default_budget_is_forty_by_fifteen() {
        let budget = RetryBudget::default();
        assert_eq!(budget.max_attempts, 40);
        assert_eq!(budget.delay, Duration::from_secs(15));
    }
}
