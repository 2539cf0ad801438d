// Standard library
use std::ffi::{OsStr, OsString};
use std::fmt::{self, Display, Formatter};

// External crates
use crate::error::{Result, ZkupError};
use duct::cmd;
use tracing::debug;
use which::which;

/// A fully spelled-out external command.
///
/// Kept as data so callers can report the exact failing invocation and tests
/// can assert on it without spawning anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// True if any argument equals `needle`.
    pub fn has_arg(&self, needle: &str) -> bool {
        self.args.iter().any(|a| a == needle)
    }
}

impl Display for ToolCommand {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Executes external commands on behalf of the installer.
pub trait CommandRunner {
    /// Runs `command` to completion. Non-zero exit is an error.
    fn run(&self, command: &ToolCommand) -> Result<()>;
}

/// Runs commands as real child processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ToolCommand) -> Result<()> {
        debug!(command = %command, "running external command");

        let output = cmd(command.program.as_str(), &command.args)
            .unchecked()
            .run()
            .map_err(|source| ZkupError::CommandSpawn {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ZkupError::CommandFailed {
                command: command.to_string(),
                status: output.status,
            });
        }
        Ok(())
    }
}

/// Checks if a command-line tool is available in the system's PATH.
pub fn is_tool_installed(tool_name: &str) -> bool {
    which(tool_name).is_ok()
}
