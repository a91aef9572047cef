//! Core types for the MeshConfig security analyzer.
//!
//! - `Severity` - finding severity levels
//! - `Category` - the closed set of security concerns the catalogue covers
//! - `Finding` - a single security issue with remediation advice
//! - `FindingSummary` - per-severity counts for a findings list

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Severity levels for security findings.
///
/// Ordered from most severe to least severe:
/// `Critical > High > Medium > Low`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Issues that must be fixed before the mesh can be considered secure
    Critical,
    /// Important issues that should be addressed
    High,
    /// Issues worth fixing but not immediately dangerous
    Medium,
    /// Informational findings
    Low,
}

impl Severity {
    /// Parse a severity from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher severity = lower numeric value for Ord
        let rank = |s: &Self| match s {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        };
        // Reverse so Critical > High > Medium > Low
        rank(other).cmp(&rank(self))
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The security concern a finding belongs to.
///
/// The catalogue uses a fixed vocabulary, so categories are a closed enum
/// rather than free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "File Format")]
    FileFormat,
    #[serde(rename = "Resource Type")]
    ResourceType,
    #[serde(rename = "mTLS")]
    Mtls,
    #[serde(rename = "Certificate Authority")]
    CertificateAuthority,
    #[serde(rename = "Certificate Validity")]
    CertificateValidity,
    #[serde(rename = "Authentication")]
    Authentication,
    #[serde(rename = "Proxy Configuration")]
    ProxyConfiguration,
    #[serde(rename = "Secret Discovery Service")]
    SecretDiscovery,
    #[serde(rename = "Trust Domain")]
    TrustDomain,
    #[serde(rename = "Authorization")]
    Authorization,
    #[serde(rename = "Telemetry")]
    Telemetry,
    #[serde(rename = "Access Logging")]
    AccessLogging,
    #[serde(rename = "RBAC")]
    Rbac,
    #[serde(rename = "Traffic Policy")]
    TrafficPolicy,
}

impl Category {
    /// Get the human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileFormat => "File Format",
            Self::ResourceType => "Resource Type",
            Self::Mtls => "mTLS",
            Self::CertificateAuthority => "Certificate Authority",
            Self::CertificateValidity => "Certificate Validity",
            Self::Authentication => "Authentication",
            Self::ProxyConfiguration => "Proxy Configuration",
            Self::SecretDiscovery => "Secret Discovery Service",
            Self::TrustDomain => "Trust Domain",
            Self::Authorization => "Authorization",
            Self::Telemetry => "Telemetry",
            Self::AccessLogging => "Access Logging",
            Self::Rbac => "RBAC",
            Self::TrafficPolicy => "Traffic Policy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A security finding produced by a rule check.
///
/// Findings are immutable once produced; a findings list is only ever
/// appended to within a single analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// How severe the issue is.
    pub severity: Severity,
    /// The concern this finding belongs to.
    pub category: Category,
    /// A human-readable message describing the specific issue.
    pub message: String,
    /// Remediation advice, independent of the observed values.
    pub recommendation: String,
    /// Dotted path to the offending field (e.g. `meshMTLS.mode`).
    /// `None` only for document-level findings.
    pub location: Option<String>,
}

impl Finding {
    /// Create a new document-level finding (no location).
    pub fn new(
        severity: Severity,
        category: Category,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            recommendation: recommendation.into(),
            location: None,
        }
    }

    /// Set the dotted field path this finding points at.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Per-severity counts for a findings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FindingSummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}
