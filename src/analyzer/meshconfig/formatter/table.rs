//! Colored terminal report, the default output format.

use crate::analyzer::meshconfig::analyze::AnalysisResult;
use crate::analyzer::meshconfig::types::Severity;
use colored::Colorize;

/// Format an analysis result as a colored terminal report.
pub fn format(result: &AnalysisResult) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!(
        "\n{}\n",
        "🛡️  MeshConfig Security Analysis".bright_white().bold()
    ));
    output.push_str(&format!("{}\n", "═".repeat(72).bright_blue()));

    if result.findings.is_empty() {
        output.push_str(&format!(
            "\n{}\n",
            "✅ No security findings. The mesh configuration follows the checked best practices."
                .green()
        ));
        return output;
    }

    output.push_str(&format_summary(result));
    output.push('\n');

    for (i, finding) in result.findings.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} {}",
            i + 1,
            colorize_severity(finding.severity),
            finding.category.as_str().bright_white()
        ));
        if let Some(location) = &finding.location {
            output.push_str(&format!(" {}", format!("({})", location).dimmed()));
        }
        output.push('\n');
        output.push_str(&format!("   {}\n", finding.message));
        output.push_str(&format!(
            "   {} {}\n",
            "→".bright_blue(),
            finding.recommendation.dimmed()
        ));
    }

    output
}

fn format_summary(result: &AnalysisResult) -> String {
    let s = &result.summary;
    format!(
        "\n{}: {}  {}: {}  {}: {}  {}: {}  Total: {}\n",
        "Critical".bright_red().bold(),
        s.critical,
        "High".red(),
        s.high,
        "Medium".yellow(),
        s.medium,
        "Low".cyan(),
        s.low,
        s.total
    )
}

fn colorize_severity(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Critical => severity.as_str().bright_red().bold(),
        Severity::High => severity.as_str().red(),
        Severity::Medium => severity.as_str().yellow(),
        Severity::Low => severity.as_str().cyan(),
    }
}
