//! Presentation: text and JSON renderings of command results.

use crate::api::BaselineReport;
use crate::error::BaselineError;
use crate::snapshot::verify::{RecheckReport, RecheckStatus, SealCheck};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

use super::parse::OutputFormat;

fn to_json(value: &impl serde::Serialize) -> Result<String, BaselineError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| BaselineError::InputError(format!("Failed to render JSON: {}", e)))
}

pub fn format_baseline_report(
    report: &BaselineReport,
    format: OutputFormat,
) -> Result<String, BaselineError> {
    if format == OutputFormat::Json {
        return to_json(report);
    }

    let mut s = format!(
        "Scan completed. CSV file created and renamed to: {}",
        report.seal.path.display()
    );
    s.push_str(&format!("\n  Files: {}", report.records));
    s.push_str(&format!("\n  Snapshot SHA-256: {}", report.seal.digest));
    if !report.unreadable.is_empty() {
        s.push_str(&format!(
            "\n  {} ({}):",
            "Unreadable".yellow(),
            report.unreadable.len()
        ));
        for path in &report.unreadable {
            s.push_str(&format!("\n    - {}", path.display()));
        }
    }
    if !report.lossy_paths.is_empty() {
        s.push_str(&format!(
            "\n  {} ({}), recheck cannot follow these:",
            "Non-UTF-8 paths".yellow(),
            report.lossy_paths.len()
        ));
        for path in &report.lossy_paths {
            s.push_str(&format!("\n    - {}", path.display()));
        }
    }
    if report.walk_errors > 0 {
        s.push_str(&format!(
            "\n  {}: {} (see log)",
            "Skipped entries".yellow(),
            report.walk_errors
        ));
    }
    Ok(s)
}

pub fn format_seal_check(check: &SealCheck) -> String {
    if check.is_intact() {
        format!(
            "Seal {}: {}\n  SHA-256: {}",
            "intact".green(),
            check.path.display(),
            check.actual
        )
    } else {
        format!(
            "Seal {}: {}\n  Name prefix: {}\n  Content prefix: {}",
            "BROKEN".red(),
            check.path.display(),
            check.expected_prefix,
            check.actual.short_hex()
        )
    }
}

fn status_label(status: &RecheckStatus) -> (String, String) {
    match status {
        RecheckStatus::Unchanged => ("unchanged".green().to_string(), String::new()),
        RecheckStatus::Modified { expected, actual } => (
            "modified".red().to_string(),
            format!("{} -> {}", expected.short_hex(), actual.short_hex()),
        ),
        RecheckStatus::Missing => ("missing".red().to_string(), String::new()),
        RecheckStatus::Unreadable { message } => {
            ("unreadable".yellow().to_string(), message.clone())
        }
        RecheckStatus::NotBaselined => (
            "not baselined".yellow().to_string(),
            "no digest in snapshot".to_string(),
        ),
        RecheckStatus::Unrepresentable => (
            "skipped".yellow().to_string(),
            "path not representable in UTF-8".to_string(),
        ),
    }
}

/// Table of every file that is not unchanged, then a summary line
pub fn format_recheck_report(report: &RecheckReport) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Status", "Detail"]);
    let mut shown = 0;
    for entry in &report.entries {
        if entry.status == RecheckStatus::Unchanged {
            continue;
        }
        let (label, detail) = status_label(&entry.status);
        table.add_row(vec![entry.path.display().to_string(), label, detail]);
        shown += 1;
    }

    let summary = format!(
        "Rechecked {} files: {} unchanged, {} drifted",
        report.entries.len(),
        report.unchanged(),
        report.drifted()
    );
    if shown == 0 {
        summary
    } else {
        format!("{}\n{}", table, summary)
    }
}

pub fn format_verify_json(
    check: &SealCheck,
    recheck: Option<&RecheckReport>,
) -> Result<String, BaselineError> {
    let mut out = json!({
        "snapshot": check.path,
        "seal_intact": check.is_intact(),
        "expected_prefix": check.expected_prefix,
        "sha256": check.actual,
    });
    if let Some(report) = recheck {
        out["recheck"] = json!({
            "unchanged": report.unchanged(),
            "drifted": report.drifted(),
            "entries": report.entries,
        });
    }
    to_json(&out)
}
