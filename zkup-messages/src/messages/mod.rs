//! Central registry for all user-facing message templates.
//!
//! ```rust
//! use zkup_messages::MESSAGES;
//!
//! let msg = MESSAGES.installer.installing_from_repo;
//! let warn = MESSAGES.warnings.ignoring_branch_for_commit;
//! ```

mod installer;
mod warnings;

pub use installer::{InstallerMessages, INSTALLER_MESSAGES};
pub use warnings::{WarningMessages, WARNING_MESSAGES};

pub struct Messages {
    pub installer: InstallerMessages,
    pub warnings: WarningMessages,
}

pub const MESSAGES: Messages = Messages {
    installer: INSTALLER_MESSAGES,
    warnings: WARNING_MESSAGES,
};
