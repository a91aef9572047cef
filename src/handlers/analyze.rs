//! Handler for the `analyze` command.

use crate::analyzer::meshconfig::{format_result_to_string, parser, run_analysis, Severity};
use crate::cli::{FormatArg, SeverityThreshold};
use log::{debug, info};
use std::path::PathBuf;

pub fn handle_analyze(
    path: PathBuf,
    format: FormatArg,
    output: Option<PathBuf>,
    severity: Option<SeverityThreshold>,
    fail_on_findings: bool,
) -> crate::Result<()> {
    info!("Analyzing mesh configuration: {}", path.display());

    let config = parser::load_document(&path)?;
    let mut result = run_analysis(Some(&config));
    debug!(
        "Analysis produced {} finding(s) before filtering",
        result.summary.total
    );

    if let Some(threshold) = severity {
        result.filter_by_threshold(threshold.into());
    }

    let output_string = format_result_to_string(&result, format.into());

    if let Some(output_path) = output {
        std::fs::write(&output_path, &output_string)?;
        println!("📄 Report exported to: {}", output_path.display());
    } else {
        println!("{}", output_string);
    }

    if fail_on_findings && result.has_findings() {
        handle_exit_codes(result.max_severity());
    }

    Ok(())
}

fn handle_exit_codes(max_severity: Option<Severity>) -> ! {
    match max_severity {
        Some(Severity::Critical) => {
            eprintln!("❌ Critical security issues found. Please address immediately.");
            std::process::exit(1);
        }
        Some(Severity::High) => {
            eprintln!("⚠️  High severity security issues found. Review recommended.");
            std::process::exit(2);
        }
        _ => {
            eprintln!("ℹ️  Security issues found but none are critical or high severity.");
            std::process::exit(3);
        }
    }
}
