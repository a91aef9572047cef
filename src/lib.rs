//! # meshlint
//!
//! A command-line security analyzer for Istio MeshConfig resources. It
//! decodes a MeshConfig document (YAML or JSON), evaluates it against a
//! fixed catalogue of security best-practice checks, and reports findings
//! with severity, category, remediation advice, and the offending field
//! path.
//!
//! ## Checks
//!
//! - Mesh-wide mTLS enablement and STRICT mode
//! - Certificate authority provider and certificate validity duration
//! - Peer authentication mode
//! - Proxy hardening: privileged mode, image pinning, startup ordering
//! - Secret Discovery Service (SDS)
//! - Trust domain configuration
//! - Default authorization policy
//! - Telemetry and access logging
//! - RBAC enforcement
//! - Outbound traffic policy
//!
//! ## Example
//!
//! ```rust
//! use meshlint::analyzer::meshconfig::{parser, run_analysis};
//!
//! # fn main() -> meshlint::Result<()> {
//! let config = parser::parse_document(
//!     "kind: MeshConfig\napiVersion: install.istio.io/v1alpha1",
//!     Default::default(),
//! )?;
//! let result = run_analysis(Some(&config));
//! println!("{} finding(s)", result.summary.total);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod cli;
pub mod error;
pub mod handlers;

// Re-export commonly used types and functions
pub use analyzer::meshconfig::{analyze, run_analysis, AnalysisResult, Finding, Severity};
pub use error::{MeshLintError, Result};
pub use handlers::*;
use cli::Commands;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Analyze {
            path,
            format,
            output,
            severity,
            fail_on_findings,
        } => handlers::handle_analyze(path, format, output, severity, fail_on_findings),
        Commands::Checks { detailed } => handlers::handle_checks(detailed),
    }
}
