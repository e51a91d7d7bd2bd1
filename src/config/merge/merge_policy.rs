//! Merge rules: defaults, override order, conflict handling.

use crate::tree::hasher::DEFAULT_CHUNK_SIZE;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override earlier ones key by key: defaults, then the config file,
/// then environment variables.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("scan.chunk_size", DEFAULT_CHUNK_SIZE as i64)?
        .set_default("scan.follow_symlinks", false)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
