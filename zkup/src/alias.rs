use zkup_core::command::{CommandRunner, ToolCommand};
use zkup_core::error::Result;
use zkup_core::user_paths::InstallDirs;
use zkup_core::{msg_format, zk_progress};
use zkup_messages::MESSAGES;

use crate::config::Binary;

/// `ln -sf {bin_dir}/{binary} {bin_dir}/{alias}`
pub fn alias_command(binary: Binary, dirs: &InstallDirs) -> ToolCommand {
    ToolCommand::new("ln")
        .arg("-sf")
        .arg(dirs.binary_path(binary.name()))
        .arg(dirs.binary_path(binary.alias()))
}

/// Creates a short alias for each installed binary, replacing existing links.
pub fn create_aliases(
    targets: &[Binary],
    dirs: &InstallDirs,
    runner: &dyn CommandRunner,
) -> Result<()> {
    for binary in targets {
        zk_progress!(
            "{}",
            msg_format!(
                MESSAGES.installer.alias_creating,
                alias = binary.alias(),
                bin = binary.name()
            )
        );
        runner.run(&alias_command(*binary, dirs))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingRunner;

    #[test]
    fn test_alias_command_points_at_installed_binary() {
        let dirs = InstallDirs::from_root("/home/me/.zkt");
        let command = alias_command(Binary::Inception, &dirs);
        assert_eq!(
            command.to_string(),
            "ln -sf /home/me/.zkt/bin/zk_inception /home/me/.zkt/bin/zki"
        );
    }

    #[test]
    fn test_only_primary_alias_when_supervisor_skipped() {
        let dirs = InstallDirs::from_root("/home/me/.zkt");
        let runner = RecordingRunner::new();

        create_aliases(&[Binary::Inception], &dirs, &runner).expect("aliases should succeed");

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].to_string().ends_with("/zki"));
    }

    #[test]
    fn test_failure_reports_command() {
        let dirs = InstallDirs::from_root("/home/me/.zkt");
        let runner = RecordingRunner::failing_at(1);

        let err = create_aliases(&[Binary::Inception, Binary::Supervisor], &dirs, &runner)
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("ln -sf /home/me/.zkt/bin/zk_supervisor /home/me/.zkt/bin/zks"));
    }

    #[test]
    #[cfg(unix)]
    fn test_real_links_are_replaced() {
        use zkup_core::command::SystemRunner;

        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let dirs = InstallDirs::from_root(temp_dir.path());
        dirs.ensure_bin_dir().expect("Failed to create bin dir");
        for binary in [Binary::Inception, Binary::Supervisor] {
            std::fs::write(dirs.binary_path(binary.name()), "fake binary")
                .expect("Failed to write fake binary");
        }
        // A stale regular file where the alias should go
        std::fs::write(dirs.binary_path("zki"), "stale").expect("Failed to write stale file");

        let targets = [Binary::Inception, Binary::Supervisor];
        create_aliases(&targets, &dirs, &SystemRunner).expect("first run should succeed");
        create_aliases(&targets, &dirs, &SystemRunner).expect("second run should succeed");

        for binary in targets {
            let link = dirs.binary_path(binary.alias());
            let target = std::fs::read_link(&link).expect("alias should be a symlink");
            assert_eq!(target, dirs.binary_path(binary.name()));
        }
    }
}
