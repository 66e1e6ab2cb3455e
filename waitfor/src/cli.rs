use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "wait-for",
    version = env!("WAITFOR_VERSION"),
    disable_version_flag = true,
    override_usage = "wait-for tcp://host:port|http://host:port|https://host:port [-- command]",
    about = "Wait for a TCP port or HTTP endpoint to be available",
    long_about = "Wait for a TCP port to become available or an HTTP endpoint to respond.\n\
                  Can optionally run a command after the port/endpoint is ready."
)]
pub struct Cli {
    /// Endpoint to wait for (tcp://host:port, http://host[:port], https://host[:port])
    pub uri: String,
    /// Timeout in seconds, zero for no timeout
    #[arg(short, long, default_value_t = 15)]
    pub timeout: u64,
    /// Do not output any status messages
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
    /// HTTP status code to wait for
    #[arg(short = 's', long = "http-status", default_value_t = 200)]
    pub http_status: u16,
    /// Show the version of this tool
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
    /// Command (and its arguments) to run once the endpoint is ready
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["wait-for", "tcp://db:5432"]).unwrap();
        assert_eq!(cli.uri, "tcp://db:5432");
        assert_eq!(cli.timeout, 15);
        assert_eq!(cli.http_status, 200);
        assert!(!cli.quiet);
        assert!(cli.command.is_empty());
    }

    #[test]
    fn short_flags_and_trailing_command() {
        let cli = Cli::try_parse_from([
            "wait-for", "http://localhost:8080", "-t", "0", "-q", "-s", "204", "--", "echo", "-n", "ready",
        ])
        .unwrap();
        assert_eq!(cli.timeout, 0);
        assert!(cli.quiet);
        assert_eq!(cli.http_status, 204);
        assert_eq!(cli.command, vec!["echo", "-n", "ready"]);
    }

    #[test]
    fn long_flags() {
        let cli = Cli::try_parse_from(["wait-for", "--timeout", "3", "--http-status", "301", "https://x"]).unwrap();
        assert_eq!(cli.timeout, 3);
        assert_eq!(cli.http_status, 301);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Cli::try_parse_from(["wait-for", "tcp://db:1", "-t", "-1"]).is_err());
        assert!(Cli::try_parse_from(["wait-for", "tcp://db:1", "-t", "abc"]).is_err());
        assert!(Cli::try_parse_from(["wait-for", "tcp://db:1", "-s", "70000"]).is_err());
        assert!(Cli::try_parse_from(["wait-for"]).is_err());
    }

    #[test]
    fn any_status_code_is_accepted() {
        let cli = Cli::try_parse_from(["wait-for", "http://localhost", "-s", "42"]).unwrap();
        assert_eq!(cli.http_status, 42);
    }

    #[test]
    fn short_v_prints_version() {
        let err = Cli::try_parse_from(["wait-for", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
