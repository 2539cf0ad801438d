pub mod command;
pub mod error;
pub mod output_macros;
pub mod user_paths;

// Re-export the pieces every installer stage touches
pub use command::{is_tool_installed, CommandRunner, SystemRunner, ToolCommand};
pub use error::{Result, ZkupError};
