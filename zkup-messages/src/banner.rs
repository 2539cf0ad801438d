/// Printed after a successful install.
pub const BANNER: &str = r#"
=========================================================================================

 ███████╗██╗  ██╗    ████████╗ ██████╗  ██████╗ ██╗     ██████╗  ██████╗ ██╗  ██╗
 ╚══███╔╝██║ ██╔╝    ╚══██╔══╝██╔═══██╗██╔═══██╗██║     ██╔══██╗██╔═══██╗╚██╗██╔╝
   ███╔╝ █████╔╝        ██║   ██║   ██║██║   ██║██║     ██████╔╝██║   ██║ ╚███╔╝
  ███╔╝  ██╔═██╗        ██║   ██║   ██║██║   ██║██║     ██╔══██╗██║   ██║ ██╔██╗
 ███████╗██║  ██╗       ██║   ╚██████╔╝╚██████╔╝███████╗██████╔╝╚██████╔╝██╔╝ ██╗
 ╚══════╝╚═╝  ╚═╝       ╚═╝    ╚═════╝  ╚═════╝ ╚══════╝╚═════╝  ╚═════╝ ╚═╝  ╚═╝

          A Comprehensive Toolkit for Creating and Managing ZK Stack Chains

=========================================================================================

Repo       : https://github.com/matter-labs/zksync-era/
Docs       : https://docs.zksync.io/
Contribute : https://github.com/matter-labs/zksync-era/pulls

=========================================================================================
"#;

/// Appended to `--help`.
pub const USAGE_EXAMPLES: &str = "\
Examples:
  zkup                             Install the latest zk_toolbox from matter-labs/zksync-era
  zkup --version 0.1.0             Install a released version
  zkup --branch main --alias       Install from a branch and create the zki/zks aliases
  zkup --path ~/src/zksync-era     Install from a local checkout

Environment:
  ZKT_DIR            Toolkit directory (default: $XDG_CONFIG_HOME/.zkt or $HOME/.zkt)
  RUST_LOG           Diagnostic log filter (default: warn)
  ZKUP_LOG_FORMAT    Diagnostic log format: pretty, compact or json";
