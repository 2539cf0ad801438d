use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZkupError {
    MissingPrerequisites(Vec<String>),
    ProjectNotFound(PathBuf),
    CommandFailed {
        command: String,
        status: ExitStatus,
    },
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    HomeDirNotFound,
    Internal(String),
    Io(#[from] std::io::Error),
    Other(#[from] anyhow::Error),
}

impl Display for ZkupError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ZkupError::MissingPrerequisites(missing) => write!(
                f,
                "The following prerequisites are missing: {}",
                missing.join(" ")
            ),
            ZkupError::ProjectNotFound(path) => {
                write!(f, "Path {} does not contain zk_toolbox", path.display())
            }
            ZkupError::CommandFailed { command, status } => {
                write!(f, "Command failed: {}", command)?;
                match status.code() {
                    Some(code) => write!(f, " (exit code {})", code),
                    None => write!(f, " (terminated by signal)"),
                }
            }
            ZkupError::CommandSpawn { command, source } => {
                write!(f, "Failed to run '{}': {}", command, source)
            }
            ZkupError::HomeDirNotFound => {
                write!(f, "Could not determine home directory\n\n")?;
                write!(f, "Fix:\n")?;
                write!(f, "  • Set HOME, or\n")?;
                write!(f, "  • Set ZKT_DIR to the desired install location")
            }
            ZkupError::Internal(s) => write!(f, "Internal error: {}", s),
            ZkupError::Io(e) => write!(f, "I/O error: {}", e),
            ZkupError::Other(e) => write!(f, "{:#}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ZkupError>;
