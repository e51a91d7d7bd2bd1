//! CLI route: single route table and run context. Dispatches to the baseline API and presentation.

use crate::api::create_baseline;
use crate::config::{BaselineConfig, ConfigLoader};
use crate::error::BaselineError;
use crate::snapshot::{read_snapshot, verify};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::parse::{Commands, OutputFormat};
use super::presentation::{
    format_baseline_report, format_recheck_report, format_seal_check, format_verify_json,
};
use super::prompt::path_or_prompt;

const ROOT_PROMPT: &str = "Enter the root directory to scan";
const OUTPUT_PROMPT: &str = "Enter the output CSV file path (including filename)";

/// Rendered command result. `success == false` means the command ran but found a
/// problem (a broken seal or drifted files).
#[derive(Debug)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

/// Runtime context for CLI execution: the effective configuration.
pub struct RunContext {
    config: BaselineConfig,
}

impl RunContext {
    /// Create run context from an optional explicit config path.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, BaselineError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: BaselineConfig) -> Self {
        Self { config }
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, BaselineError> {
        match command {
            Commands::Scan {
                root,
                output,
                follow_symlinks,
                format,
            } => {
                let root = path_or_prompt(root.clone(), ROOT_PROMPT)?;
                let output = path_or_prompt(output.clone(), OUTPUT_PROMPT)?;

                let mut scan = self.config.scan.clone();
                if *follow_symlinks {
                    scan.follow_symlinks = true;
                }
                debug!(?scan, "Effective scan settings");

                let report = create_baseline(&root, &output, &scan)?;
                Ok(CommandOutput::ok(format_baseline_report(&report, *format)?))
            }
            Commands::Verify {
                snapshot,
                recheck,
                format,
            } => self.handle_verify(snapshot, *recheck, *format),
        }
    }

    fn handle_verify(
        &self,
        snapshot: &Path,
        recheck: bool,
        format: OutputFormat,
    ) -> Result<CommandOutput, BaselineError> {
        let check = verify::verify_seal(snapshot)?;
        let report = if recheck {
            let records = read_snapshot(snapshot)?;
            info!(records = records.len(), "Rechecking recorded files");
            Some(verify::recheck(&records, self.config.scan.chunk_size))
        } else {
            None
        };

        let success = check.is_intact() && report.as_ref().map_or(true, |r| r.is_clean());
        let text = match format {
            OutputFormat::Json => format_verify_json(&check, report.as_ref())?,
            OutputFormat::Text => {
                let mut text = format_seal_check(&check);
                if let Some(ref report) = report {
                    text.push('\n');
                    text.push_str(&format_recheck_report(report));
                }
                text
            }
        };
        Ok(CommandOutput { text, success })
    }
}
