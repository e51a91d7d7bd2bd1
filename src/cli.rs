//! CLI domain: parse, route, prompt, output, and presentation only.
//! No pipeline logic; the route table dispatches to the baseline API.

mod output;
mod parse;
mod presentation;
mod prompt;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_baseline_report, format_recheck_report, format_seal_check, format_verify_json,
};
pub use route::{CommandOutput, RunContext};
