//! zkup-messages
//!
//! User-facing message templates for the zkup installer. Templates use
//! `{name}` placeholders filled by `zkup_core::msg_format!`.

pub mod banner;
pub mod messages;

pub use banner::{BANNER, USAGE_EXAMPLES};
pub use messages::MESSAGES;
