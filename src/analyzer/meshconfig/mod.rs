//! MeshConfig security analyzer.
//!
//! Evaluates a decoded Istio MeshConfig document against a fixed catalogue
//! of security best-practice checks and produces findings with severity,
//! category, message, and remediation guidance.
//!
//! # Example
//!
//! ```rust
//! use meshlint::analyzer::meshconfig::{run_analysis, parser, Severity};
//!
//! let config = parser::parse_document(
//!     "kind: MeshConfig\napiVersion: install.istio.io/v1alpha1",
//!     Default::default(),
//! ).unwrap();
//!
//! let result = run_analysis(Some(&config));
//! assert!(result.should_fail(Severity::Critical)); // RBAC is off by default
//! ```
//!
//! # Checks
//!
//! The catalogue covers mesh-wide mTLS enablement and mode, certificate
//! authority and validity settings, peer authentication, proxy hardening
//! (privileged mode, image pinning, startup ordering), SDS, trust domain,
//! default authorization policy, telemetry and access logging, RBAC
//! enforcement, and the outbound traffic policy.

pub mod analyze;
pub mod checks;
pub mod formatter;
pub mod parser;
pub mod types;

// Re-export main types and functions
pub use analyze::{AnalysisResult, analyze, run_analysis, summarize};
pub use checks::{CheckSpec, builtin_checks};
pub use formatter::{OutputFormat, format_result_to_string};
pub use types::{Category, Finding, FindingSummary, Severity};
