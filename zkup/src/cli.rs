use clap::Parser;
use zkup_messages::USAGE_EXAMPLES;

use crate::config::InstallConfig;

#[derive(Parser, Debug)]
#[command(
    name = "zkup",
    author,
    about,
    long_about = None,
    disable_version_flag = true,
    args_override_self = true,
    after_help = USAGE_EXAMPLES
)]
pub struct Args {
    /// Install zk_toolbox from a local zksync-era checkout
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<String>,

    /// Install from a remote GitHub repository
    #[arg(short, long, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Install from a specific branch
    #[arg(short, long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Install from a specific commit
    #[arg(short, long, value_name = "HASH")]
    pub commit: Option<String>,

    /// Install a specific zk_toolbox release
    #[arg(short, long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Skip installing zk_supervisor
    #[arg(long)]
    pub skip_zk_supervisor: bool,

    /// Create the 'zki' and 'zks' aliases
    #[arg(short, long)]
    pub alias: bool,

    /// Everything after a bare `--`; ignored
    #[arg(last = true, hide = true)]
    pub trailing: Vec<String>,
}

impl From<Args> for InstallConfig {
    fn from(args: Args) -> Self {
        InstallConfig {
            path: args.path,
            repo: non_empty(args.repo),
            branch: non_empty(args.branch),
            commit: non_empty(args.commit),
            version: non_empty(args.version),
            skip_supervisor: args.skip_zk_supervisor,
            create_alias: args.alias,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
