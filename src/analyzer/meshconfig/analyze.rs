//! Analysis orchestration for the MeshConfig analyzer.
//!
//! Ties together shape validation, the check catalogue, and the summary
//! aggregation. `analyze` is a pure function of the configuration value:
//! there is no analyzer instance and no state carried between calls, so
//! concurrent analyses only need their own configuration snapshot.

use crate::analyzer::meshconfig::checks::builtin_checks;
use crate::analyzer::meshconfig::types::{Category, Finding, FindingSummary, Severity};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Result of analyzing one configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Findings in canonical check-execution order.
    pub findings: Vec<Finding>,
    /// Per-severity counts.
    pub summary: FindingSummary,
}

impl AnalysisResult {
    /// Build a result from a findings list, computing the summary.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let summary = summarize(&findings);
        Self { findings, summary }
    }

    /// Check if there are any findings.
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Get the maximum severity in the results.
    pub fn max_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|f| f.severity).max()
    }

    /// Check if any finding is at or above the given severity.
    pub fn should_fail(&self, threshold: Severity) -> bool {
        self.max_severity().is_some_and(|max| max >= threshold)
    }

    /// Drop findings below the given severity and recompute the summary.
    pub fn filter_by_threshold(&mut self, threshold: Severity) {
        self.findings.retain(|f| f.severity >= threshold);
        self.summary = summarize(&self.findings);
    }
}

/// Analyze a decoded configuration document.
///
/// Structurally invalid input (absent, not a mapping, missing or wrong
/// resource type) yields exactly one Critical finding and an early return;
/// the rule catalogue is never partially run. A structurally valid
/// MeshConfig always gets the full catalogue, however many fields are
/// missing. Malformed content never produces an error, only findings.
pub fn analyze(config: Option<&Value>) -> Vec<Finding> {
    let mut findings = Vec::new();

    let Some(config) = config.filter(|c| c.is_mapping()) else {
        findings.push(Finding::new(
            Severity::Critical,
            Category::FileFormat,
            "Invalid or empty configuration file",
            "Provide a valid Istio MeshConfig",
        ));
        return findings;
    };

    // The original's truthiness test: an empty or non-string kind or
    // apiVersion counts as missing.
    let kind = config.get("kind").and_then(|k| k.as_str()).filter(|k| !k.is_empty());
    let api_version = config
        .get("apiVersion")
        .and_then(|v| v.as_str())
        .filter(|v| !v.is_empty());

    let (Some(kind), Some(_)) = (kind, api_version) else {
        findings.push(Finding::new(
            Severity::Critical,
            Category::ResourceType,
            "File is not a valid Kubernetes resource",
            "Ensure the file has apiVersion and kind fields",
        ));
        return findings;
    };

    if kind != "MeshConfig" {
        findings.push(Finding::new(
            Severity::Critical,
            Category::ResourceType,
            format!("Expected MeshConfig but found {}", kind),
            "Use a valid Istio MeshConfig resource",
        ));
        return findings;
    }

    for check in builtin_checks() {
        findings.extend((check.func)(config));
    }

    findings
}

/// Reduce a findings list into per-severity counts.
pub fn summarize(findings: &[Finding]) -> FindingSummary {
    let mut summary = FindingSummary {
        total: findings.len(),
        ..FindingSummary::default()
    };
    for finding in findings {
        match finding.severity {
            Severity::Critical => summary.critical += 1,
            Severity::High => summary.high += 1,
            Severity::Medium => summary.medium += 1,
            Severity::Low => summary.low += 1,
        }
    }
    summary
}

/// Analyze a document and aggregate the summary in one step.
pub fn run_analysis(config: Option<&Value>) -> AnalysisResult {
    AnalysisResult::from_findings(analyze(config))
}
