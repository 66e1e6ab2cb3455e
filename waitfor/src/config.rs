use crate::cli::Cli;
use waitfor_core::{CommandSpec, Endpoint, EndpointError, WaitPolicy};

/// Everything the run needs, validated once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Endpoint,
    pub policy: WaitPolicy,
    pub command: Option<CommandSpec>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, EndpointError> {
        let endpoint = Endpoint::parse(&cli.uri)?;
        Ok(Config {
            endpoint,
            policy: WaitPolicy::new(cli.timeout, cli.http_status),
            command: CommandSpec::from_args(cli.command),
        })
    }
}
