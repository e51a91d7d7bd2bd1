//! Configuration System
//!
//! Layered configuration: built-in defaults, an optional global TOML file (or an
//! explicit `--config` file), then `FSBASELINE__*` environment variables. CLI flags
//! are applied on top by the binary.

use crate::logging::LoggingConfig;
use crate::tree::hasher::DEFAULT_CHUNK_SIZE;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::environment::ENV_PREFIX;
pub use sources::global_file::global_config_path;

/// Upper bound for `scan.chunk_size` (64 MiB)
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Bytes read per digest update
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Follow symbolic links while walking (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            follow_symlinks: false,
        }
    }
}

impl ScanConfig {
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
        }
    }

    /// Validate scan settings
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than zero".to_string());
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(format!(
                "chunk_size {} exceeds the maximum of {} bytes",
                self.chunk_size, MAX_CHUNK_SIZE
            ));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Scan(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Scan(msg) => write!(f, "Scan: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl BaselineConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.scan.validate() {
            errors.push(ValidationError::Scan(e));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }
        if !matches!(
            self.logging.output.as_str(),
            "stdout" | "stderr" | "file" | "file+stderr"
        ) {
            errors.push(ValidationError::Logging(format!(
                "output must be 'stdout', 'stderr', 'file' or 'file+stderr', got '{}'",
                self.logging.output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
