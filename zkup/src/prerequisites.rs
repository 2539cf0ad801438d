use tracing::debug;
use zkup_core::command::is_tool_installed;
use zkup_core::error::{Result, ZkupError};

/// Tools that must be on PATH before anything is installed.
pub const PREREQUISITES: [&str; 2] = ["cargo", "git"];

/// Checks every prerequisite against the process PATH.
pub fn check() -> Result<()> {
    check_with(is_tool_installed)
}

/// Checks every prerequisite with a custom lookup, reporting all missing tools at once.
pub fn check_with<F>(is_installed: F) -> Result<()>
where
    F: Fn(&str) -> bool,
{
    let missing: Vec<String> = PREREQUISITES
        .iter()
        .filter(|&&tool| !is_installed(tool))
        .map(|tool| tool.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ZkupError::MissingPrerequisites(missing));
    }
    debug!(prerequisites = ?PREREQUISITES, "prerequisites satisfied");
    Ok(())
}
