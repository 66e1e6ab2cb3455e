use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

mod cli;
mod config;
mod logging;

use cli::Cli;
use config::Config;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    logging::init(cli.quiet);
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::from_cli(cli)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    let outcome = rt.block_on(readiness::wait_for_endpoint(&config.endpoint, &config.policy))?;
    drop(rt);

    if !outcome.is_ready() {
        error!("Operation timed out");
        return Ok(ExitCode::FAILURE);
    }
    info!("{} is available after {} attempt(s)", config.endpoint, outcome.attempts());

    let code = match command_runner::exec_command(config.command.as_ref()) {
        Ok(status) => status.exit_code(),
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    };
    Ok(exit_code(code))
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map(ExitCode::from).unwrap_or(ExitCode::FAILURE)
}
