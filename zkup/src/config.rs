// Standard library
use std::path::Path;

pub const DEFAULT_REPO: &str = "matter-labs/zksync-era";
pub const TOOLKIT_NAME: &str = "zk_toolbox";

/// The binaries zkup knows how to install, in install order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binary {
    Inception,
    Supervisor,
}

impl Binary {
    pub fn name(self) -> &'static str {
        match self {
            Binary::Inception => "zk_inception",
            Binary::Supervisor => "zk_supervisor",
        }
    }

    pub fn alias(self) -> &'static str {
        match self {
            Binary::Inception => "zki",
            Binary::Supervisor => "zks",
        }
    }
}

/// Everything parsed from the command line. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallConfig {
    /// Exactly as supplied, so an empty `--path ""` can still be reported.
    pub path: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
    pub commit: Option<String>,
    pub version: Option<String>,
    pub skip_supervisor: bool,
    pub create_alias: bool,
}

impl InstallConfig {
    /// The local checkout to install from. Empty paths count as unset.
    pub fn local_path(&self) -> Option<&Path> {
        self.path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(Path::new)
    }

    /// True when `--path` was given but empty.
    pub fn has_empty_path(&self) -> bool {
        matches!(self.path.as_deref(), Some(""))
    }

    pub fn targets(&self) -> Vec<Binary> {
        if self.skip_supervisor {
            vec![Binary::Inception]
        } else {
            vec![Binary::Inception, Binary::Supervisor]
        }
    }
}
