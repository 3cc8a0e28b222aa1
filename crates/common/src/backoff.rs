//! Backoff delay calculation
//!
//! Used by the notification poller to stretch its cadence after consecutive
//! failures. This is scheduling only: nothing in the workspace re-issues a
//! failed request, the calculator merely decides when the *next* scheduled
//! attempt happens.

use std::time::Duration;

/// Strategy for computing the delay before the next scheduled attempt
#[derive(Debug, Clone, PartialEq)]
pub enum BackoffStrategy {
    /// Fixed delay regardless of failure count
    Fixed(Duration),
    /// Linear backoff: initial_delay + (attempt * increment)
    Linear { initial_delay: Duration, increment: Duration },
    /// Exponential backoff: initial_delay * base^attempt, capped at max_delay
    Exponential { initial_delay: Duration, base: f64, max_delay: Duration },
}

impl BackoffStrategy {
    /// Calculate the delay for the given attempt (0-based)
    pub fn calculate_delay(&self, attempt: u32) -> Duration {
        match self {
            BackoffStrategy::Fixed(delay) => *delay,
            BackoffStrategy::Linear { initial_delay, increment } => {
                *initial_delay + increment.saturating_mul(attempt)
            }
            BackoffStrategy::Exponential { initial_delay, base, max_delay } => {
                let delay = initial_delay.as_millis() as f64 * base.powi(attempt as i32);
                let delay_ms = delay.min(max_delay.as_millis() as f64) as u64;
                Duration::from_millis(delay_ms)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ignores_attempt_count() {
        let strategy = BackoffStrategy::Fixed(Duration::from_secs(30));
        assert_eq!(strategy.calculate_delay(0), Duration::from_secs(30));
        assert_eq!(strategy.calculate_delay(10), Duration::from_secs(30));
    }

    #[test]
    fn linear_grows_by_increment() {
        let strategy = BackoffStrategy::Linear {
            initial_delay: Duration::from_secs(1),
            increment: Duration::from_secs(2),
        };
        assert_eq!(strategy.calculate_delay(0), Duration::from_secs(1));
        assert_eq!(strategy.calculate_delay(3), Duration::from_secs(7));
    }

    #[test]
    fn exponential_doubles_until_ceiling() {
        let strategy = BackoffStrategy::Exponential {
            initial_delay: Duration::from_secs(30),
            base: 2.0,
            max_delay: Duration::from_secs(240),
        };
        assert_eq!(strategy.calculate_delay(0), Duration::from_secs(30));
        assert_eq!(strategy.calculate_delay(1), Duration::from_secs(60));
        assert_eq!(strategy.calculate_delay(2), Duration::from_secs(120));
        assert_eq!(strategy.calculate_delay(3), Duration::from_secs(240));
        // Ceiling holds no matter how many failures accumulate
        assert_eq!(strategy.calculate_delay(12), Duration::from_secs(240));
    }
}
