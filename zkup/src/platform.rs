// Standard library
use std::env;
use std::ffi::OsStr;
use std::path::Path;

// External crates
use colored::*;
use zkup_core::user_paths::is_in_path;
use zkup_core::{msg_format, zk_info};
use zkup_messages::MESSAGES;

/// Tells the user how to put `bin_dir` on PATH if it isn't there already.
pub fn print_path_hint(bin_dir: &Path) {
    let path_var = env::var_os("PATH").unwrap_or_default();
    if let Some(hint) = path_hint(bin_dir, &path_var) {
        zk_info!(
            "{}",
            msg_format!(MESSAGES.installer.path_not_configured, dir = bin_dir.display())
        );
        eprintln!("  {}", hint.cyan());
    }
}

/// The export line to suggest, or `None` when `bin_dir` is already on PATH.
pub fn path_hint(bin_dir: &Path, path_var: &OsStr) -> Option<String> {
    if is_in_path(bin_dir, path_var) {
        return None;
    }
    Some(msg_format!(
        MESSAGES.installer.path_export_hint,
        dir = bin_dir.display()
    ))
}
