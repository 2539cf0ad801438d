//! Progress and summary messages for the install flow

pub struct InstallerMessages {
    pub alias_creating: &'static str,
    pub binary_installed: &'static str,
    pub binary_installing: &'static str,
    pub installing_from_path: &'static str,
    pub installing_from_repo: &'static str,
    pub path_export_hint: &'static str,
    pub path_not_configured: &'static str,
    pub prerequisites_hint: &'static str,
}

pub const INSTALLER_MESSAGES: InstallerMessages = InstallerMessages {
    alias_creating: "Creating alias '{alias}' for {bin}",
    binary_installed: "Installed {bin} to {path}",
    binary_installing: "Installing {bin}",
    installing_from_path: "Installing zk_toolbox from {path}",
    installing_from_repo: "Installing zk_toolbox from {repo}",
    path_export_hint: "export PATH=\"{dir}:$PATH\"",
    path_not_configured: "{dir} is not in your PATH. Add the following to your shell profile:",
    prerequisites_hint: "Install the missing tools and make sure they are on your PATH",
};
