//! Output formatters for analysis results.

pub mod json;
pub mod plain;
pub mod table;

use crate::analyzer::meshconfig::analyze::AnalysisResult;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Boxed terminal report with colors.
    #[default]
    Table,
    /// Plain text, one finding per line.
    Plain,
    /// JSON output (findings + summary).
    Json,
}

impl OutputFormat {
    /// Parse from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "plain" | "text" => Some(Self::Plain),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Format an analysis result to a string.
pub fn format_result_to_string(result: &AnalysisResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => table::format(result),
        OutputFormat::Plain => plain::format(result),
        OutputFormat::Json => json::format(result),
    }
}
