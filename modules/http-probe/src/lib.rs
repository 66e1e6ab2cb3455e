//! HTTP(S) GET probe comparing the response status with an expected code.

use anyhow::{anyhow, Context, Result};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpProbeOptions {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirects: usize,
    pub user_agent: String,
}

impl Default for HttpProbeOptions {
    fn default() -> Self {
        HttpProbeOptions {
            connect_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(5),
            redirects: 10,
            user_agent: format!("wait-for/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Client that keeps no idle connections, so nothing stays open between polls.
pub fn build_client(opts: &HttpProbeOptions) -> Result<Client> {
    Client::builder()
        .redirect(Policy::limited(opts.redirects))
        .connect_timeout(opts.connect_timeout)
        .timeout(opts.request_timeout)
        .user_agent(opts.user_agent.clone())
        .pool_max_idle_per_host(0)
        .build()
        .context("building HTTP client")
}

/// GET `url` once. Ok carries the status when it equals `expected`; a different
/// status or a transport error is returned as Err.
pub async fn check_status(client: &Client, url: &str, expected: u16) -> Result<u16> {
    let resp = client.get(url).send().await.with_context(|| format!("GET {}", url))?;
    let status = resp.status().as_u16();
    drop(resp);
    if status == expected {
        debug!("HTTP status code {} == {}", status, expected);
        Ok(status)
    } else {
        Err(anyhow!("HTTP status code {} != {}", status, expected))
    }
}
