//! Error types for configuration and external collaborators
//!
//! The simulation itself never fails; only loading configuration and
//! talking to storage can.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration could not be loaded or describes a degenerate game
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

/// Best-score storage failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored best score is corrupt: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(&'static str),
}
