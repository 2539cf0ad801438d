//! Tracing initialization for zkup
//!
//! Diagnostics go to stderr through `tracing`; user-facing output stays on the
//! `zk_*!` macros.
//!
//! Filtering uses the standard `RUST_LOG` variable (default `warn`):
//! - `RUST_LOG=debug` - show every external command before it runs
//! - `RUST_LOG=zkup=debug,zkup_core=info` - per-crate levels
//!
//! `ZKUP_LOG_FORMAT` selects the output format:
//! - `pretty` (default)
//! - `compact`
//! - `json`

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zkup_core::error::{Result, ZkupError};

pub const LOG_FORMAT_ENV: &str = "ZKUP_LOG_FORMAT";
const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    /// Unknown values fall back to [`LogFormat::Pretty`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }

    fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Initialize the global subscriber from `RUST_LOG` and `ZKUP_LOG_FORMAT`.
pub fn init() -> Result<()> {
    init_with_defaults(DEFAULT_FILTER)
}

/// Initialize with a default filter used when `RUST_LOG` is not set.
///
/// Fails if a global subscriber is already installed.
pub fn init_with_defaults(default_filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(fmt::layer().with_ansi(false).with_writer(std::io::stderr).json())
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().with_writer(std::io::stderr).compact())
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).pretty())
            .try_init(),
    };

    result.map_err(|e| ZkupError::Internal(format!("Failed to initialize tracing: {}", e)))
}
