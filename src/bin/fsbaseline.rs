//! fsbaseline CLI Binary
//!
//! Command-line interface for creating and verifying sealed filesystem baselines.

use clap::Parser;
use fsbaseline::cli::{Cli, RunContext};
use fsbaseline::config::ConfigLoader;
use fsbaseline::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

/// Exit code when verification ran but found a broken seal or drifted files
const EXIT_VERIFY_FAILED: i32 = 2;

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("fsbaseline starting");

    let context = match RunContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", fsbaseline::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output.text);
            if !output.success {
                info!("Verification found problems");
                process::exit(EXIT_VERIFY_FAILED);
            }
            info!("Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", fsbaseline::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let loaded = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => ConfigLoader::load(),
    };
    let mut config = loaded.map(|c| c.logging).unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
