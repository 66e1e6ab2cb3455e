//! Runs the trailing command once the endpoint is ready. Standard streams are
//! inherited; the child's exit code is handed back for the caller to forward.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::{debug, error};
use waitfor_core::CommandSpec;

/// Conventional shell codes for a program that could not be started.
pub const EXIT_NOT_FOUND: i32 = 127;
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl CommandError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Launch { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
                _ => 1,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Succeeded,
    Failed { code: i32 },
}

impl CommandStatus {
    pub fn exit_code(&self) -> i32 {
        match *self {
            CommandStatus::Succeeded => 0,
            CommandStatus::Failed { code } => code,
        }
    }
}

/// Run `spec` to completion exactly once.
pub fn run(spec: &CommandSpec) -> Result<CommandStatus, CommandError> {
    debug!("Command specified: {}", spec.program);
    let status = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(&spec.working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| CommandError::Launch { program: spec.program.clone(), source })?;
    if status.success() {
        return Ok(CommandStatus::Succeeded);
    }
    error!("Error executing command: {} {}", spec.program, status);
    Ok(CommandStatus::Failed { code: exit_code_of(status) })
}

/// Run the trailing command if there is one; without one this does nothing.
pub fn exec_command(spec: Option<&CommandSpec>) -> Result<CommandStatus, CommandError> {
    match spec {
        Some(spec) => run(spec),
        None => {
            debug!("No command specified.");
            Ok(CommandStatus::Succeeded)
        }
    }
}

fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    1
}
