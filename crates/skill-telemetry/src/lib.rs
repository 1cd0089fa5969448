//! # Skill Telemetry
//!
//! Structured logging bootstrap for services that host the request parser.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use skill_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//!
//!     // Parse failures now show up as structured `warn` events
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SKILL_SERVICE_NAME` | `skill-gate` | Service name in logs |
//! | `SKILL_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `SKILL_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `SKILL_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}
