use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use waitfor_core::{Endpoint, EndpointError, Scheme, WaitPolicy};

/// One readiness check against an endpoint. `Ok` means ready; `Err` carries the
/// reason the attempt failed and is always retryable.
#[async_trait]
pub trait Probe: Send + Sync {
    fn target(&self) -> &str;
    async fn check(&self) -> Result<()>;
}

pub struct TcpProbe {
    host: String,
    port: u16,
    per_attempt: Duration,
    label: String,
}

impl TcpProbe {
    pub fn new(host: &str, port: u16, per_attempt: Duration) -> Self {
        TcpProbe { host: host.to_string(), port, per_attempt, label: format!("tcp://{}:{}", host, port) }
    }
}

#[async_trait]
impl Probe for TcpProbe {
    fn target(&self) -> &str { &self.label }

    async fn check(&self) -> Result<()> {
        tcp_probe::connect_once(&self.host, self.port, self.per_attempt).await
    }
}

/// Serves both `http` and `https`; TLS is selected by the URL.
pub struct HttpProbe {
    client: Client,
    url: String,
    expected_status: u16,
}

impl HttpProbe {
    pub fn new(client: Client, url: &str, expected_status: u16) -> Self {
        HttpProbe { client, url: url.to_string(), expected_status }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    fn target(&self) -> &str { &self.url }

    async fn check(&self) -> Result<()> {
        http_probe::check_status(&self.client, &self.url, self.expected_status).await.map(|_| ())
    }
}

/// Pick the probe for the endpoint's scheme.
pub fn probe_for(endpoint: &Endpoint, policy: &WaitPolicy) -> Result<Box<dyn Probe>> {
    match endpoint.scheme {
        Scheme::Tcp => {
            let (host, port) = endpoint.socket_target().ok_or(EndpointError::MissingPort)?;
            Ok(Box::new(TcpProbe::new(host, port, policy.attempt_timeout)))
        }
        Scheme::Http | Scheme::Https => {
            let opts = http_probe::HttpProbeOptions {
                connect_timeout: policy.attempt_timeout,
                ..Default::default()
            };
            let client = http_probe::build_client(&opts)?;
            Ok(Box::new(HttpProbe::new(client, &endpoint.raw, policy.expected_status)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tcp_endpoint_gets_tcp_probe() {
        let ep = Endpoint::parse("tcp://db.internal:5432").unwrap();
        let probe = probe_for(&ep, &WaitPolicy::default()).unwrap();
        assert_eq!(probe.target(), "tcp://db.internal:5432");
    }

    #[tokio::test]
    async fn http_probe_uses_raw_uri() {
        let ep = Endpoint::parse("https://api.example.com/healthz?deep=1").unwrap();
        let probe = probe_for(&ep, &WaitPolicy::default()).unwrap();
        assert_eq!(probe.target(), "https://api.example.com/healthz?deep=1");
    }

    #[test]
    fn tcp_without_port_is_rejected() {
        let ep = Endpoint { scheme: Scheme::Tcp, host: "db".into(), port: None, raw: "tcp://db".into() };
        assert!(probe_for(&ep, &WaitPolicy::default()).is_err());
    }
}
