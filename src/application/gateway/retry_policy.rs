use std::time::Duration;

/// Number of time units waited after a connection failure.
const CONNECTION_DELAY_UNITS: u32 = 2;

/// Delay schedule for the gateway's retry loop.
///
/// All delays are expressed in multiples of `unit` (one second in production)
/// so tests and local runs can shrink the whole schedule at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    unit: Duration,
}

impl RetryPolicy {
    pub fn new(unit: Duration) -> Self {
        Self { unit }
    }

    /// Wait after a rate-limited attempt `attempt` (0-indexed): `2^attempt` units.
    pub fn rate_limit_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.unit.saturating_mul(factor)
    }

    /// Fixed wait after a connection failure, independent of the attempt number.
    pub fn connection_delay(&self) -> Duration {
        self.unit.saturating_mul(CONNECTION_DELAY_UNITS)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
