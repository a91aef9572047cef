//! Plain text formatter, one finding per line. Suited to grepping and
//! CI logs where color codes get in the way.

use crate::analyzer::meshconfig::analyze::AnalysisResult;

/// Format an analysis result as plain text.
pub fn format(result: &AnalysisResult) -> String {
    if result.findings.is_empty() {
        return "No security findings.\n".to_string();
    }

    let mut output = String::new();
    for finding in &result.findings {
        let location = finding.location.as_deref().unwrap_or("<document>");
        output.push_str(&format!(
            "{}: [{}] {} - {}\n  Recommendation: {}\n",
            location, finding.severity, finding.category, finding.message, finding.recommendation
        ));
    }

    let s = &result.summary;
    output.push_str(&format!(
        "\nFound {} issue(s): {} critical, {} high, {} medium, {} low.\n",
        s.total, s.critical, s.high, s.medium, s.low
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::meshconfig::analyze::run_analysis;
    use crate::analyzer::meshconfig::analyze::AnalysisResult;

    #[test]
    fn test_plain_output_lists_findings_and_summary() {
        let config =
            serde_yaml::from_str("kind: MeshConfig\napiVersion: install.istio.io/v1alpha1")
                .unwrap();
        let result = run_analysis(Some(&config));
        let output = format(&result);

        assert!(output.contains("rbac.mode: [Critical] RBAC"));
        assert!(output.contains("Recommendation:"));
        assert!(output.contains("1 critical"));
    }

    #[test]
    fn test_plain_output_clean_result() {
        let result = AnalysisResult::from_findings(Vec::new());
        assert_eq!(format(&result), "No security findings.\n");
    }

    #[test]
    fn test_plain_output_document_level_finding() {
        let result = run_analysis(None);
        let output = format(&result);
        assert!(output.starts_with("<document>: [Critical] File Format"));
    }
}
