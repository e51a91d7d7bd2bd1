//! Logging System
//!
//! Structured logging using the `tracing` crate. Configurable level, format and
//! destination. Per-file digest problems are emitted at `warn`, so the default
//! level keeps them visible while stdout stays reserved for command output.

use crate::error::BaselineError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Master switch; `--quiet` turns it off
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file, file+stderr
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output includes "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format, terminal outputs only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Default log file: `<platform data dir>/fsbaseline/fsbaseline.log`
pub fn default_log_file_path() -> Result<PathBuf, BaselineError> {
    let dirs = directories::ProjectDirs::from("", "", "fsbaseline").ok_or_else(|| {
        BaselineError::ConfigError("Could not determine a home directory for logs".to_string())
    })?;
    Ok(dirs.data_local_dir().join("fsbaseline.log"))
}

/// Configured log file, or the platform default.
///
/// `--log-file` is merged into the config before this is called.
pub fn resolve_log_file_path(configured: Option<PathBuf>) -> Result<PathBuf, BaselineError> {
    match configured {
        Some(path) => Ok(path),
        None => default_log_file_path(),
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (FSBASELINE_LOG, FSBASELINE_LOG_FORMAT, ...)
/// 2. The given config (already merged from CLI flags and config files)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), BaselineError> {
    let defaults = LoggingConfig::default();
    let config = config.unwrap_or(&defaults);
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let writer = build_writer(config, &output)?;

    // No escape codes in files
    let use_color = config.color && !output.file;

    let layer = fmt::layer()
        .with_target(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_ansi(use_color)
        .with_writer(writer);

    let base_subscriber = Registry::default().with(filter);
    let result = if format == "json" {
        base_subscriber.with(layer.json()).try_init()
    } else {
        base_subscriber.with(layer).try_init()
    };

    result.map_err(|e| BaselineError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

fn build_writer(
    config: &LoggingConfig,
    output: &OutputDestinations,
) -> Result<BoxMakeWriter, BaselineError> {
    let file_writer = if output.file {
        let log_file = resolve_log_file_path(config.file.clone())?;
        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BaselineError::ConfigError(format!("Failed to create log directory: {}", e))
            })?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .map_err(|e| {
                BaselineError::ConfigError(format!("Failed to open log file {:?}: {}", log_file, e))
            })?;
        Some(Arc::new(file))
    } else {
        None
    };

    let writer = match (file_writer, output.stdout, output.stderr) {
        (Some(file), _, true) => BoxMakeWriter::new(std::io::stderr.and(file)),
        (Some(file), _, false) => BoxMakeWriter::new(file),
        (None, true, _) => BoxMakeWriter::new(std::io::stdout),
        (None, false, _) => BoxMakeWriter::new(std::io::stderr),
    };
    Ok(writer)
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, BaselineError> {
    if let Ok(filter) = EnvFilter::try_from_env("FSBASELINE_LOG") {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(&config.level);

    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| BaselineError::ConfigError(format!("Invalid log directive: {}", e)))?,
        );
    }

    if let Ok(modules_str) = std::env::var("FSBASELINE_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            let parts: Vec<&str> = module_spec.split('=').collect();
            if parts.len() == 2 {
                let directive = format!("{}={}", parts[0].trim(), parts[1].trim());
                filter = filter.add_directive(directive.parse().map_err(|e| {
                    BaselineError::ConfigError(format!("Invalid log directive from env: {}", e))
                })?);
            }
        }
    }

    Ok(filter)
}

/// Determine output format from config or environment
fn determine_format(config: &LoggingConfig) -> Result<String, BaselineError> {
    if let Ok(format) = std::env::var("FSBASELINE_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.format.as_str();
    if format != "json" && format != "text" {
        return Err(BaselineError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format.to_string())
}

/// Output destinations
#[derive(Debug)]
struct OutputDestinations {
    stdout: bool,
    stderr: bool,
    file: bool,
}

/// Determine output destinations from config or environment
fn determine_output(config: &LoggingConfig) -> Result<OutputDestinations, BaselineError> {
    if let Ok(output) = std::env::var("FSBASELINE_LOG_OUTPUT") {
        return parse_output_destinations(&output);
    }
    parse_output_destinations(&config.output)
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, BaselineError> {
    let (stdout, stderr, file) = match output {
        "stdout" => (true, false, false),
        "stderr" => (false, true, false),
        "file" => (false, false, true),
        "file+stderr" => (false, true, true),
        _ => {
            return Err(BaselineError::ConfigError(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr', 'file', or 'file+stderr')",
                output
            )))
        }
    };
    Ok(OutputDestinations {
        stdout,
        stderr,
        file,
    })
}
