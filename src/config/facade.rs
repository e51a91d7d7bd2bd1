//! Config loading facade: one entry point that layers every source.

use super::merge::merge_policy;
use super::sources::{environment, global_file};
use super::BaselineConfig;
use crate::error::BaselineError;
use std::path::Path;
use tracing::debug;

/// Loads [`BaselineConfig`] from defaults, files and the environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration.
    ///
    /// Precedence (highest last): defaults, global config file, environment.
    pub fn load() -> Result<BaselineConfig, BaselineError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Load configuration from an explicit file instead of the global one.
    ///
    /// The file must exist. Environment variables still override it.
    pub fn load_from_file(path: &Path) -> Result<BaselineConfig, BaselineError> {
        debug!(config_path = %path.display(), "Loading configuration file");
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_file(builder, path, true);
        let builder = environment::add_to_builder(builder);
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<BaselineConfig, BaselineError> {
        let config: BaselineConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            BaselineError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
