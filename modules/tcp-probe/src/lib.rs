//! TCP connect probe with a per-attempt timeout.

use anyhow::{anyhow, Context, Result};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

/// Attempt one TCP connection to `host:port`. The socket is closed before returning;
/// nothing is read or written.
pub async fn connect_once(host: &str, port: u16, per_attempt: Duration) -> Result<()> {
    let stream = timeout(per_attempt, TcpStream::connect((host, port)))
        .await
        .map_err(|_| anyhow!("connect to {}:{} timed out after {:?}", host, port, per_attempt))?
        .with_context(|| format!("connect to {}:{}", host, port))?;
    trace!(host, port, peer = ?stream.peer_addr().ok(), "tcp connect succeeded");
    drop(stream);
    Ok(())
}
