use std::time::Duration;
use tokio::time::Instant;

/// Fixed cadence between failed probes.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
/// Upper bound on a single connect attempt, kept separate from the overall deadline.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitPolicy {
    /// `None` waits forever.
    pub timeout: Option<Duration>,
    pub poll_interval: Duration,
    pub attempt_timeout: Duration,
    pub expected_status: u16,
}

impl WaitPolicy {
    /// `timeout_secs == 0` disables the deadline.
    pub fn new(timeout_secs: u64, expected_status: u16) -> Self {
        let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));
        WaitPolicy { timeout, poll_interval: POLL_INTERVAL, attempt_timeout: ATTEMPT_TIMEOUT, expected_status }
    }
}

impl Default for WaitPolicy {
    fn default() -> Self { WaitPolicy::new(15, 200) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    pub fn start(policy: &WaitPolicy, now: Instant) -> Self {
        Deadline(policy.timeout.map(|t| now + t))
    }

    /// True only once `now` is strictly past the deadline.
    pub fn is_expired(&self, now: Instant) -> bool {
        matches!(self.0, Some(at) if now > at)
    }
}
