use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::analyzer::meshconfig::{OutputFormat, Severity};

#[derive(Parser)]
#[command(name = "meshlint")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Security analyzer for Istio MeshConfig resources")]
#[command(
    long_about = "Analyzes Istio MeshConfig files against a catalogue of security best-practice checks covering mTLS, certificate management, authentication, authorization, proxy hardening, telemetry, and traffic policy."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a MeshConfig file and report security findings
    Analyze {
        /// Path to the MeshConfig file (YAML or JSON)
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: FormatArg,

        /// Export report to file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Only report findings at or above this severity
        #[arg(long, value_enum)]
        severity: Option<SeverityThreshold>,

        /// Exit with a non-zero code when findings remain
        #[arg(long)]
        fail_on_findings: bool,
    },

    /// List the built-in security checks
    Checks {
        /// Show check descriptions
        #[arg(short, long)]
        detailed: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeverityThreshold {
    Low,
    Medium,
    High,
    Critical,
}

impl From<SeverityThreshold> for Severity {
    fn from(threshold: SeverityThreshold) -> Self {
        match threshold {
            SeverityThreshold::Low => Severity::Low,
            SeverityThreshold::Medium => Severity::Medium,
            SeverityThreshold::High => Severity::High,
            SeverityThreshold::Critical => Severity::Critical,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "meshlint",
            "analyze",
            "mesh.yaml",
            "--format",
            "json",
            "--severity",
            "high",
            "--fail-on-findings",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                path,
                format,
                severity,
                fail_on_findings,
                ..
            } => {
                assert_eq!(path, PathBuf::from("mesh.yaml"));
                assert_eq!(format, FormatArg::Json);
                assert_eq!(severity, Some(SeverityThreshold::High));
                assert!(fail_on_findings);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_threshold_converts_to_severity() {
        assert_eq!(Severity::from(SeverityThreshold::Critical), Severity::Critical);
        assert_eq!(Severity::from(SeverityThreshold::Low), Severity::Low);
    }
}
