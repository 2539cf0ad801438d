//! zkup installer library.
//!
//! Parses the command line, checks prerequisites, resolves where to install
//! zk_toolbox from and drives `cargo install` to put `zk_inception` and
//! `zk_supervisor` into the user's toolkit directory.

pub mod alias;
pub mod cli;
pub mod config;
pub mod installer;
pub mod platform;
pub mod prerequisites;

#[cfg(test)]
mod test_support;

// Re-export key items for the binary and integration tests
pub use config::{Binary, InstallConfig};
pub use installer::{plan, run_install, GitRef, InstallPlan, InstallSource};
