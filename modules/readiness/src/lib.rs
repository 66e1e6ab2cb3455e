//! Readiness loop: probe an endpoint once per poll interval until it answers
//! or the deadline passes.
//!
//! The deadline is only consulted after a failed probe, so a success that lands
//! past the deadline still counts. A zero timeout never expires.

mod probe;

pub use probe::{probe_for, HttpProbe, Probe, TcpProbe};

use anyhow::Result;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};
use waitfor_core::{Deadline, Endpoint, WaitPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Ready { attempts: u32 },
    TimedOut { attempts: u32 },
}

impl WaitOutcome {
    pub fn is_ready(&self) -> bool { matches!(self, WaitOutcome::Ready { .. }) }

    pub fn attempts(&self) -> u32 {
        match *self {
            WaitOutcome::Ready { attempts } | WaitOutcome::TimedOut { attempts } => attempts,
        }
    }
}

pub async fn wait_for(probe: &dyn Probe, policy: &WaitPolicy) -> WaitOutcome {
    let started = Instant::now();
    let deadline = Deadline::start(policy, started);
    let mut attempts: u32 = 0;
    loop {
        attempts = attempts.saturating_add(1);
        match probe.check().await {
            Ok(()) => {
                debug!(attempts, elapsed_ms = started.elapsed().as_millis() as u64, "{} is ready", probe.target());
                return WaitOutcome::Ready { attempts };
            }
            Err(e) => {
                debug!(attempt = attempts, error = %format!("{:#}", e), "{} not ready", probe.target());
            }
        }
        if deadline.is_expired(Instant::now()) {
            return WaitOutcome::TimedOut { attempts };
        }
        sleep(policy.poll_interval).await;
    }
}

/// Build the probe for `endpoint` and block until it is ready or timed out.
/// Errors only when the probe itself cannot be constructed.
pub async fn wait_for_endpoint(endpoint: &Endpoint, policy: &WaitPolicy) -> Result<WaitOutcome> {
    let probe = probe_for(endpoint, policy)?;
    match policy.timeout {
        Some(t) => info!("Waiting up to {}s for {}", t.as_secs(), endpoint),
        None => info!("Waiting for {} without timeout", endpoint),
    }
    Ok(wait_for(probe.as_ref(), policy).await)
}
