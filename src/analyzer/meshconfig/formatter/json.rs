//! JSON formatter for analysis results.

use crate::analyzer::meshconfig::analyze::AnalysisResult;

/// Serialize an analysis result to pretty-printed JSON.
pub fn format(result: &AnalysisResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}
