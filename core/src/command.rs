use std::path::PathBuf;

/// Command to run once the endpoint is ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl CommandSpec {
    /// First element is the program; `None` for an empty command line.
    pub fn from_args(mut argv: Vec<String>) -> Option<Self> {
        if argv.is_empty() {
            return None;
        }
        let program = argv.remove(0);
        Some(CommandSpec { program, args: argv, working_dir: PathBuf::from(".") })
    }
}
