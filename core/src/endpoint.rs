//! Parsing of the `scheme://host[:port]` target given on the command line.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::{Host, Url};

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("error parsing URI: {0}")]
    Parse(#[from] url::ParseError),
    #[error("unsupported protocol '{0}'")]
    UnsupportedScheme(String),
    #[error("TCP protocol requires a port to be specified")]
    MissingPort,
    #[error("URI '{0}' has no host")]
    MissingHost(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Tcp,
    Http,
    Https,
}

impl Scheme {
    pub const SUPPORTED: [Scheme; 3] = [Scheme::Tcp, Scheme::Http, Scheme::Https];

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Tcp => "tcp",
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::SUPPORTED
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EndpointError::UnsupportedScheme(s.to_string()))
    }
}

/// A validated wait target. Built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: Scheme,
    /// Host name or IP literal, IPv6 without brackets.
    pub host: String,
    /// Explicit port, if the URI carried one. Always set for `tcp`.
    pub port: Option<u16>,
    /// The URI exactly as given, used verbatim for HTTP requests.
    pub raw: String,
}

impl Endpoint {
    pub fn parse(raw: &str) -> Result<Self, EndpointError> {
        let url = Url::parse(raw)?;
        let scheme: Scheme = url.scheme().parse()?;
        let port = url.port();
        if scheme == Scheme::Tcp && port.is_none() {
            return Err(EndpointError::MissingPort);
        }
        let host = match url.host() {
            Some(Host::Domain(d)) if !d.is_empty() => d.to_string(),
            Some(Host::Ipv4(ip)) => ip.to_string(),
            Some(Host::Ipv6(ip)) => ip.to_string(),
            _ => return Err(EndpointError::MissingHost(raw.to_string())),
        };
        Ok(Endpoint { scheme, host, port, raw: raw.to_string() })
    }

    /// `host:port` pair for socket-level probes, `None` when no port was given.
    pub fn socket_target(&self) -> Option<(&str, u16)> {
        self.port.map(|p| (self.host.as_str(), p))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tcp_with_port() {
        let ep = Endpoint::parse("tcp://localhost:9999").unwrap();
        assert_eq!(ep.scheme, Scheme::Tcp);
        assert_eq!(ep.host, "localhost");
        assert_eq!(ep.port, Some(9999));
        assert_eq!(ep.socket_target(), Some(("localhost", 9999)));
    }

    #[test]
    fn parse_http_without_port() {
        let ep = Endpoint::parse("http://example.com/health").unwrap();
        assert_eq!(ep.scheme, Scheme::Http);
        assert_eq!(ep.host, "example.com");
        assert_eq!(ep.port, None);
        assert_eq!(ep.raw, "http://example.com/health");
    }

    #[test]
    fn parse_https_with_port() {
        let ep = Endpoint::parse("https://10.0.0.5:8443").unwrap();
        assert_eq!(ep.scheme, Scheme::Https);
        assert_eq!(ep.host, "10.0.0.5");
        assert_eq!(ep.port, Some(8443));
    }

    #[test]
    fn ipv6_host_has_no_brackets() {
        let ep = Endpoint::parse("tcp://[::1]:5432").unwrap();
        assert_eq!(ep.host, "::1");
        assert_eq!(ep.port, Some(5432));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let ep = Endpoint::parse("TCP://db:5432").unwrap();
        assert_eq!(ep.scheme, Scheme::Tcp);
        assert_eq!("HTTPS".parse::<Scheme>().unwrap(), Scheme::Https);
    }

    #[test]
    fn tcp_requires_port() {
        let err = Endpoint::parse("tcp://localhost").unwrap_err();
        assert!(matches!(err, EndpointError::MissingPort));
    }

    #[test]
    fn reject_unsupported_scheme() {
        match Endpoint::parse("ftp://files.example.com:21") {
            Err(EndpointError::UnsupportedScheme(s)) => assert_eq!(s, "ftp"),
            other => panic!("unexpected: {:?}", other),
        }
        // No scheme at all: `url` reads "localhost" as the scheme.
        assert!(matches!(
            Endpoint::parse("localhost:9999"),
            Err(EndpointError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn reject_garbage() {
        assert!(matches!(Endpoint::parse("not a uri"), Err(EndpointError::Parse(_))));
        assert!(matches!(Endpoint::parse("tcp://localhost:99999"), Err(EndpointError::Parse(_))));
    }

    #[test]
    fn opaque_tcp_uri_has_no_port() {
        assert!(matches!(Endpoint::parse("tcp:5432"), Err(EndpointError::MissingPort)));
    }
}
