//! Environment source: FSBASELINE__<SECTION>__<KEY>, e.g. FSBASELINE__SCAN__CHUNK_SIZE

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "FSBASELINE";

/// Add environment overrides to builder (highest file-independent precedence).
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    )
}
