//! Per-submission retry bookkeeping with exponential backoff.

use std::time::Duration;

use super::ClientError;

/// Delay before the retry that follows a failed `attempt` (zero-based):
/// `2^(attempt + 1) * base`. No jitter, no cap.
pub fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let factor = 2u32.checked_pow(attempt.saturating_add(1)).unwrap_or(u32::MAX);
    base.saturating_mul(factor)
}

/// Retry state for one submission. Created fresh per call, never shared.
#[derive(Debug)]
pub struct RetryState {
    attempt: u32,
    max_attempts: u32,
    base: Duration,
    last_error: Option<ClientError>,
}

impl RetryState {
    /// `max_attempts` is clamped to at least one attempt.
    pub fn new(max_attempts: u32, base: Duration) -> Self {
        Self {
            attempt: 0,
            max_attempts: max_attempts.max(1),
            base,
            last_error: None,
        }
    }

    /// Zero-based index of the attempt in flight.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Records a retryable failure. Returns the delay to wait before the next attempt,
    /// or `None` when the budget is spent.
    pub fn next_delay(&mut self, error: ClientError) -> Option<Duration> {
        self.last_error = Some(error);
        if self.attempt + 1 < self.max_attempts {
            let delay = backoff_delay(self.base, self.attempt);
            self.attempt += 1;
            Some(delay)
        } else {
            None
        }
    }

    /// The terminal error once retries are exhausted.
    pub fn into_error(self) -> ClientError {
        self.last_error.unwrap_or(ClientError::RateLimited {
            attempts: self.attempt + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Duration = Duration::from_millis(1000);

    #[test]
    fn test_backoff_doubles_from_two_units() {
        assert_eq!(backoff_delay(BASE, 0), Duration::from_secs(2));
        assert_eq!(backoff_delay(BASE, 1), Duration::from_secs(4));
        assert_eq!(backoff_delay(BASE, 2), Duration::from_secs(8));
    }

    #[test]
    fn test_backoff_saturates_instead_of_overflowing() {
        let delay = backoff_delay(BASE, 40);
        assert_eq!(delay, BASE.saturating_mul(u32::MAX));
    }

    #[test]
    fn test_three_attempts_allow_two_retries() {
        let mut state = RetryState::new(3, BASE);
        assert_eq!(
            state.next_delay(ClientError::RateLimited { attempts: 1 }),
            Some(Duration::from_secs(2))
        );
        assert_eq!(state.attempt(), 1);
        assert_eq!(
            state.next_delay(ClientError::RateLimited { attempts: 2 }),
            Some(Duration::from_secs(4))
        );
        assert_eq!(state.attempt(), 2);
        assert_eq!(
            state.next_delay(ClientError::RateLimited { attempts: 3 }),
            None
        );
        assert!(matches!(
            state.into_error(),
            ClientError::RateLimited { attempts: 3 }
        ));
    }

    #[test]
    fn test_single_attempt_never_retries() {
        let mut state = RetryState::new(1, BASE);
        assert_eq!(
            state.next_delay(ClientError::RateLimited { attempts: 1 }),
            None
        );
    }

    #[test]
    fn test_zero_max_attempts_is_clamped_to_one() {
        let state = RetryState::new(0, BASE);
        assert_eq!(state.max_attempts(), 1);
    }
}
