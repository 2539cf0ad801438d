//! Advisory warnings for flags that are accepted but ignored

pub struct WarningMessages {
    pub ignoring_branch_for_commit: &'static str,
    pub ignoring_path_for_repo: &'static str,
    pub ignoring_remote_for_path: &'static str,
    pub ignoring_selectors_for_version: &'static str,
}

pub const WARNING_MESSAGES: WarningMessages = WarningMessages {
    ignoring_branch_for_commit: "Ignoring --branch argument when installing by commit",
    ignoring_path_for_repo: "Ignoring --path argument when installing from repository",
    ignoring_remote_for_path: "Ignoring {flags} when installing from local path",
    ignoring_selectors_for_version: "Ignoring {flags} when installing by version",
};
