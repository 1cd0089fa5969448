//! Parser configuration with validation.

use crate::domain::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Default body limit (128 KB). Platform requests are a few KB at most.
pub const DEFAULT_MAX_BODY_BYTES: usize = 128 * 1024;

/// Request parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Bodies larger than this are rejected before decoding
    pub max_body_bytes: usize,
    /// Reject signed request types whose signature headers are empty.
    /// Only disable for local replay tooling.
    pub enforce_signature_headers: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            enforce_signature_headers: true,
        }
    }
}

impl ParserConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_body_bytes cannot be 0".into(),
            ));
        }
        Ok(())
    }

    /// Configuration for replaying captured traffic without its headers.
    pub fn replay() -> Self {
        Self {
            enforce_signature_headers: false,
            ..Self::default()
        }
    }
}
