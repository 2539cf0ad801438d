use clap::Parser;
use zkup::cli::Args;
use zkup::{installer, platform, prerequisites, InstallConfig};
use zkup_core::command::SystemRunner;
use zkup_core::error::{Result, ZkupError};
use zkup_core::user_paths;
use zkup_core::{zk_error, zk_error_hint};
use zkup_messages::MESSAGES;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args.into()) {
        zk_error!("{:#}", e);
        if matches!(e, ZkupError::MissingPrerequisites(_)) {
            zk_error_hint!("{}", MESSAGES.installer.prerequisites_hint);
        }
        std::process::exit(1);
    }
}

fn run(config: InstallConfig) -> Result<()> {
    zkup_logging::init()?;

    // 1. Nothing touches the filesystem until every tool is present
    prerequisites::check()?;

    // 2. Install, summarize, alias
    let dirs = user_paths::install_dirs()?;
    installer::run_install(&config, &dirs, &SystemRunner)?;

    platform::print_path_hint(&dirs.bin);
    Ok(())
}
