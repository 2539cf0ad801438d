// Standard library
use std::path::{Path, PathBuf};

// External crates
use colored::Colorize;
use tracing::{debug, info_span};
use zkup_core::command::{CommandRunner, ToolCommand};
use zkup_core::error::{Result, ZkupError};
use zkup_core::user_paths::InstallDirs;
use zkup_core::{msg_format, zk_println, zk_progress, zk_success, zk_warning};
use zkup_messages::{BANNER, MESSAGES};

// Internal imports
use crate::alias;
use crate::config::{Binary, InstallConfig, DEFAULT_REPO, TOOLKIT_NAME};

const BUILD_TOOL: &str = "cargo";

/// Which revision of the remote repository to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitRef {
    Tag(String),
    Rev(String),
    Branch(String),
    DefaultBranch,
}

impl GitRef {
    fn cargo_args(&self) -> Vec<&str> {
        match self {
            GitRef::Tag(tag) => vec!["--tag", tag.as_str()],
            GitRef::Rev(rev) => vec!["--rev", rev.as_str()],
            GitRef::Branch(branch) => vec!["--branch", branch.as_str()],
            GitRef::DefaultBranch => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallSource {
    Local(PathBuf),
    Remote { repo: String, reference: GitRef },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub source: InstallSource,
    pub targets: Vec<Binary>,
    /// Flags that were supplied but lost to a higher-precedence source or selector.
    pub ignored: Vec<&'static str>,
}

impl InstallPlan {
    /// Advisory warnings for every ignored flag.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        match &self.source {
            InstallSource::Local(_) => {
                if !self.ignored.is_empty() {
                    warnings.push(msg_format!(
                        MESSAGES.warnings.ignoring_remote_for_path,
                        flags = describe_flags(&self.ignored)
                    ));
                }
            }
            InstallSource::Remote { reference, .. } => {
                if self.ignored.contains(&"--path") {
                    warnings.push(MESSAGES.warnings.ignoring_path_for_repo.to_string());
                }
                let selectors: Vec<&str> = self
                    .ignored
                    .iter()
                    .copied()
                    .filter(|flag| *flag != "--path")
                    .collect();
                if selectors.is_empty() {
                    return warnings;
                }
                match reference {
                    GitRef::Tag(_) => warnings.push(msg_format!(
                        MESSAGES.warnings.ignoring_selectors_for_version,
                        flags = describe_flags(&selectors)
                    )),
                    _ => warnings.push(MESSAGES.warnings.ignoring_branch_for_commit.to_string()),
                }
            }
        }
        warnings
    }
}

/// Resolves the install source and revision. Precedence:
/// local path, then version, then commit, then branch.
pub fn plan(config: &InstallConfig) -> InstallPlan {
    let targets = config.targets();

    if let Some(path) = config.local_path() {
        let ignored = [
            ("--repo", &config.repo),
            ("--branch", &config.branch),
            ("--commit", &config.commit),
            ("--version", &config.version),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(flag, _)| flag)
        .collect();

        return InstallPlan {
            source: InstallSource::Local(path.to_path_buf()),
            targets,
            ignored,
        };
    }

    let mut ignored = Vec::new();
    if config.has_empty_path() {
        ignored.push("--path");
    }

    let reference = if let Some(version) = &config.version {
        if config.commit.is_some() {
            ignored.push("--commit");
        }
        if config.branch.is_some() {
            ignored.push("--branch");
        }
        GitRef::Tag(format!("{}-v{}", TOOLKIT_NAME, version))
    } else if let Some(commit) = &config.commit {
        if config.branch.is_some() {
            ignored.push("--branch");
        }
        GitRef::Rev(commit.clone())
    } else if let Some(branch) = &config.branch {
        GitRef::Branch(branch.clone())
    } else {
        GitRef::DefaultBranch
    };

    InstallPlan {
        source: InstallSource::Remote {
            repo: config
                .repo
                .clone()
                .unwrap_or_else(|| DEFAULT_REPO.to_string()),
            reference,
        },
        targets,
        ignored,
    }
}

pub fn repo_url(repo: &str) -> String {
    format!("https://github.com/{}", repo)
}

/// `cargo install` for a single crate of a local checkout.
pub fn local_install_command(source: &Path, binary: Binary, dirs: &InstallDirs) -> ToolCommand {
    let crate_dir = source.join(TOOLKIT_NAME).join("crates").join(binary.name());
    ToolCommand::new(BUILD_TOOL)
        .args(["install", "--root"])
        .arg(&dirs.root)
        .arg("--path")
        .arg(crate_dir)
        .arg("--force")
}

/// `cargo install` for all targets of a remote repository in one go.
pub fn remote_install_command(
    repo: &str,
    reference: &GitRef,
    targets: &[Binary],
    dirs: &InstallDirs,
) -> ToolCommand {
    ToolCommand::new(BUILD_TOOL)
        .args(["install", "--root"])
        .arg(&dirs.root)
        .arg("--git")
        .arg(repo_url(repo))
        .args(reference.cargo_args())
        .arg("--locked")
        .args(targets.iter().map(|binary| binary.name()))
        .arg("--force")
}

/// Executes a resolved plan. The first failing invocation aborts the install;
/// anything installed before it stays in place.
pub fn install(plan: &InstallPlan, dirs: &InstallDirs, runner: &dyn CommandRunner) -> Result<()> {
    let _span = info_span!("install", targets = ?plan.targets).entered();

    match &plan.source {
        InstallSource::Local(source) => install_local(plan, source, dirs, runner),
        InstallSource::Remote { repo, reference } => {
            install_from_repo(plan, repo, reference, dirs, runner)
        }
    }
}

fn install_local(
    plan: &InstallPlan,
    source: &Path,
    dirs: &InstallDirs,
    runner: &dyn CommandRunner,
) -> Result<()> {
    if !source.join(TOOLKIT_NAME).is_dir() {
        return Err(ZkupError::ProjectNotFound(source.to_path_buf()));
    }
    print_warnings(plan);

    zk_progress!(
        "{}",
        msg_format!(MESSAGES.installer.installing_from_path, path = source.display())
    );
    for binary in &plan.targets {
        zk_progress!(
            "{}",
            msg_format!(MESSAGES.installer.binary_installing, bin = binary.name())
        );
        runner.run(&local_install_command(source, *binary, dirs))?;
    }
    Ok(())
}

fn install_from_repo(
    plan: &InstallPlan,
    repo: &str,
    reference: &GitRef,
    dirs: &InstallDirs,
    runner: &dyn CommandRunner,
) -> Result<()> {
    print_warnings(plan);

    zk_progress!(
        "{}",
        msg_format!(MESSAGES.installer.installing_from_repo, repo = repo)
    );
    runner.run(&remote_install_command(repo, reference, &plan.targets, dirs))
}

fn print_warnings(plan: &InstallPlan) {
    for warning in plan.warnings() {
        zk_warning!("{}", warning);
    }
}

/// Banner plus one line per installed binary.
pub fn print_summary(targets: &[Binary], dirs: &InstallDirs) {
    zk_println!("{}", BANNER.cyan());
    for binary in targets {
        zk_success!(
            "{}",
            msg_format!(
                MESSAGES.installer.binary_installed,
                bin = binary.name(),
                path = dirs.binary_path(binary.name()).display()
            )
        );
    }
}

/// Directory setup, install, summary and optional aliases, in that order.
pub fn run_install(
    config: &InstallConfig,
    dirs: &InstallDirs,
    runner: &dyn CommandRunner,
) -> Result<InstallPlan> {
    dirs.ensure_bin_dir()?;

    let plan = plan(config);
    debug!(?plan, "resolved install plan");

    install(&plan, dirs, runner)?;
    print_summary(&plan.targets, dirs);

    if config.create_alias {
        alias::create_aliases(&plan.targets, dirs, runner)?;
    }
    Ok(plan)
}

fn describe_flags(flags: &[&str]) -> String {
    match flags {
        [] => String::new(),
        [only] => format!("{} argument", only),
        [init @ .., last] => format!("{} and {} arguments", init.join(", "), last),
    }
}
