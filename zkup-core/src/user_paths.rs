//! Resolution of the user-scoped install directory.
//!
//! The toolkit directory is `$ZKT_DIR` when set, otherwise `.zkt` under
//! `$XDG_CONFIG_HOME` (falling back to the home directory). Binaries land in
//! its `bin` subdirectory.

// Standard library
use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

// External crates
use anyhow::Context;
use tracing::debug;

use crate::error::{Result, ZkupError};

pub const TOOLKIT_DIR_ENV: &str = "ZKT_DIR";
pub const BASE_DIR_ENV: &str = "XDG_CONFIG_HOME";
const TOOLKIT_DIR_NAME: &str = ".zkt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallDirs {
    /// Passed to the build tool as `--root`.
    pub root: PathBuf,
    pub bin: PathBuf,
}

impl InstallDirs {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            bin: root.join("bin"),
            root,
        }
    }

    pub fn binary_path(&self, name: &str) -> PathBuf {
        self.bin.join(name)
    }

    /// Creates the bin directory if it does not exist yet.
    pub fn ensure_bin_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.bin).with_context(|| {
            format!("Failed to create install directory {}", self.bin.display())
        })?;
        Ok(())
    }
}

/// Install directories derived from the current process environment.
pub fn install_dirs() -> Result<InstallDirs> {
    install_dirs_with(|key| env::var_os(key))
}

/// Install directories derived from an arbitrary variable lookup.
pub fn install_dirs_with<F>(lookup: F) -> Result<InstallDirs>
where
    F: Fn(&str) -> Option<OsString>,
{
    let root = match non_empty(lookup(TOOLKIT_DIR_ENV)) {
        Some(dir) => PathBuf::from(dir),
        None => base_dir(&lookup)?.join(TOOLKIT_DIR_NAME),
    };
    debug!(root = %root.display(), "resolved toolkit directory");
    Ok(InstallDirs::from_root(root))
}

fn base_dir<F>(lookup: &F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(dir) = non_empty(lookup(BASE_DIR_ENV)) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(home) = non_empty(lookup("HOME")) {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or(ZkupError::HomeDirNotFound)
}

fn non_empty(value: Option<OsString>) -> Option<OsString> {
    value.filter(|v| !v.is_empty())
}

/// True if `dir` is one of the entries of the PATH-style list `path_var`.
pub fn is_in_path(dir: &Path, path_var: &OsStr) -> bool {
    env::split_paths(path_var).any(|entry| entry == dir)
}
